use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::dto::categories::CategoryMap;
use crate::repository::DieselRepository;
use crate::routes::errors::ApiError;
use crate::routes::success;
use crate::services::categories::{
    show_categories as show_categories_service,
    show_category_questions as show_category_questions_service,
};

#[derive(Serialize)]
struct CategoriesBody {
    categories: CategoryMap,
}

pub async fn show_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let categories = show_categories_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(CategoriesBody { categories })))
}

pub async fn show_category_questions(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let result = show_category_questions_service(category_id.into_inner(), repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(result)))
}
