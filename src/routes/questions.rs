use actix_web::{HttpResponse, web};

use crate::forms::questions::{AddQuestionForm, QuestionsPageQuery, SearchQuestionsForm};
use crate::repository::DieselRepository;
use crate::routes::errors::ApiError;
use crate::routes::{Acknowledged, success};
use crate::services::questions::{
    add_question as add_question_service, delete_question as delete_question_service,
    list_questions as list_questions_service, search_questions as search_questions_service,
};

pub async fn list_questions(
    params: web::Query<QuestionsPageQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = list_questions_service(params.page(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(page)))
}

pub async fn add_question(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddQuestionForm>,
) -> Result<HttpResponse, ApiError> {
    add_question_service(form, repo.get_ref())?;
    Ok(HttpResponse::Created().json(success(Acknowledged {})))
}

pub async fn delete_question(
    question_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    delete_question_service(question_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(Acknowledged {})))
}

pub async fn search_questions(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SearchQuestionsForm>,
) -> Result<HttpResponse, ApiError> {
    let result = search_questions_service(form, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(result)))
}
