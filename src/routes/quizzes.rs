use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::dto::questions::QuestionDto;
use crate::forms::quizzes::{QuizForm, QuizFormPayload};
use crate::repository::DieselRepository;
use crate::routes::errors::ApiError;
use crate::routes::success;
use crate::services::ServiceError;
use crate::services::quizzes::next_quiz_question as next_quiz_question_service;

#[derive(Serialize)]
struct QuizBody {
    question: QuestionDto,
}

pub async fn next_quiz_question(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<QuizForm>,
) -> Result<HttpResponse, ApiError> {
    let payload = QuizFormPayload::try_from(form).map_err(|e| {
        log::warn!("{e}");
        ServiceError::from(e)
    })?;

    let question = next_quiz_question_service(payload, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(success(QuizBody { question })))
}
