use crate::QUESTIONS_PER_PAGE;
use crate::domain::types::QuestionId;
use crate::dto::categories::category_map;
use crate::dto::questions::{QuestionDto, QuestionPageDto, SearchResultDto};
use crate::forms::questions::{AddQuestionForm, AddQuestionFormPayload, SearchQuestionsForm};
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter};

use super::{ServiceError, ServiceResult};

/// One page of all questions ordered by id, with the category labels.
///
/// A page outside the list, including page numbers below one, is
/// `NotFound` rather than an empty page.
pub fn list_questions<R>(page: i64, repo: &R) -> ServiceResult<QuestionPageDto>
where
    R: QuestionReader + CategoryReader,
{
    let page = match usize::try_from(page) {
        Ok(page) if page >= 1 => page,
        _ => return Err(ServiceError::NotFound),
    };

    let query = QuestionListQuery::default().paginate(page, QUESTIONS_PER_PAGE);
    let (total, questions) = match repo.list_questions(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list questions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if questions.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let categories = match repo.list_categories() {
        Ok(categories) => category_map(categories),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(QuestionPageDto {
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: total,
        categories,
    })
}

/// Store a new question.
///
/// The body has already been checked for the four fields. Values that cannot
/// form a row, such as a non-integer difficulty or a category id below one,
/// fail like any other rejected insert.
pub fn add_question<R>(form: AddQuestionForm, repo: &R) -> ServiceResult<()>
where
    R: QuestionWriter,
{
    let question = match AddQuestionFormPayload::try_from(form) {
        Ok(payload) => payload.into_new_question(),
        Err(e) => {
            log::error!("Failed to create question: {e}");
            return Err(ServiceError::Internal);
        }
    };
    match repo.create_question(&question) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to create question: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_question<R>(question_id: i32, repo: &R) -> ServiceResult<()>
where
    R: QuestionReader + QuestionWriter,
{
    let question_id = match QuestionId::new(question_id) {
        Ok(question_id) => question_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_question_by_id(question_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get question: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_question(question_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete question {question_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Questions whose text contains the term, ignoring case.
pub fn search_questions<R>(form: SearchQuestionsForm, repo: &R) -> ServiceResult<SearchResultDto>
where
    R: QuestionReader,
{
    let query = QuestionListQuery::default().search(form.search_term);
    let (total, questions) = match repo.list_questions(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to search questions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if questions.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(SearchResultDto {
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: total,
    })
}
