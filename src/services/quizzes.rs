use rand::Rng;
use rand::seq::SliceRandom;

use crate::dto::questions::QuestionDto;
use crate::forms::quizzes::QuizFormPayload;
use crate::repository::{QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Pick a random question in scope that has not been asked yet.
pub fn next_quiz_question<R>(payload: QuizFormPayload, repo: &R) -> ServiceResult<QuestionDto>
where
    R: QuestionReader,
{
    next_quiz_question_with(payload, repo, &mut rand::thread_rng())
}

/// Same as [`next_quiz_question`] with a caller-supplied random source.
pub fn next_quiz_question_with<R, G>(
    payload: QuizFormPayload,
    repo: &R,
    rng: &mut G,
) -> ServiceResult<QuestionDto>
where
    R: QuestionReader,
    G: Rng + ?Sized,
{
    let mut query = QuestionListQuery::default().exclude(payload.previous_questions);
    if let Some(category_id) = payload.scope.category_id() {
        query = query.category(category_id);
    }

    let (_total, candidates) = match repo.list_questions(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list quiz candidates: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match candidates.choose(rng) {
        Some(question) => Ok(QuestionDto::from(question.clone())),
        None => Err(ServiceError::NotFound),
    }
}
