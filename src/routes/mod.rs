use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::routes::errors::ApiError;

pub mod categories;
pub mod errors;
pub mod questions;
pub mod quizzes;

/// Successful response body: `{"success": true, ...body}`.
#[derive(Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

pub fn success<T: Serialize>(body: T) -> Success<T> {
    Success {
        success: true,
        body,
    }
}

/// Body of responses that carry nothing beyond the success flag.
#[derive(Serialize)]
pub struct Acknowledged {}

/// CORS policy: any origin, the methods and headers the frontend uses.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Register every endpoint together with the extractor error handlers.
///
/// Each path only accepts its listed methods; anything else is answered
/// with the JSON 405 body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected JSON body: {err}");
        ApiError::BadRequest.into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected path parameter: {err}");
        ApiError::NotFound.into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected query string: {err}");
        ApiError::BadRequest.into()
    }))
    .service(
        web::resource("/categories")
            .route(web::get().to(categories::show_categories))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/categories/{category_id}/questions")
            .route(web::get().to(categories::show_category_questions))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/questions")
            .route(web::get().to(questions::list_questions))
            .route(web::post().to(questions::add_question))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/questions/{question_id}")
            .route(web::delete().to(questions::delete_question))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/searchTerm")
            .route(web::post().to(questions::search_questions))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/quizzes")
            .route(web::post().to(quizzes::next_quiz_question))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(not_found));
}
