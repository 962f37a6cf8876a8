use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoryMap, category_map};
use crate::dto::questions::{CategoryQuestionsDto, QuestionDto};
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Every category label keyed by id.
pub fn show_categories<R>(repo: &R) -> ServiceResult<CategoryMap>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(category_map(categories)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every question of one category, ordered by id.
///
/// The category is looked up after the questions, so a known category with
/// no questions yields an empty list while an unknown id is `NotFound`.
pub fn show_category_questions<R>(category_id: i32, repo: &R) -> ServiceResult<CategoryQuestionsDto>
where
    R: CategoryReader + QuestionReader,
{
    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let (total, questions) =
        match repo.list_questions(QuestionListQuery::default().category(category_id)) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Failed to list questions of category {category_id}: {e}");
                return Err(ServiceError::Internal);
            }
        };

    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(CategoryQuestionsDto {
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: total,
        current_category: category.kind.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::question::Question;
    use crate::domain::types::{CategoryType, QuestionId};
    use crate::repository::test::TestRepository;

    fn sample_category(id: i32, kind: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            kind: CategoryType::new(kind).unwrap(),
        }
    }

    fn sample_question(id: i32, category: i32) -> Question {
        Question {
            id: QuestionId::new(id).unwrap(),
            question: format!("Question {id}?"),
            answer: format!("Answer {id}"),
            category: CategoryId::new(category).unwrap(),
            difficulty: 1,
        }
    }

    fn sample_repo() -> TestRepository {
        TestRepository::new(
            vec![sample_category(2, "Art"), sample_category(1, "Science")],
            vec![sample_question(3, 1), sample_question(1, 1)],
        )
    }

    #[test]
    fn shows_categories_keyed_by_id() {
        let categories = show_categories(&sample_repo()).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[&2], "Art");
    }

    #[test]
    fn store_failure_is_internal() {
        let repo = sample_repo().failing();
        assert_eq!(show_categories(&repo).unwrap_err(), ServiceError::Internal);
        assert_eq!(
            show_category_questions(1, &repo).unwrap_err(),
            ServiceError::Internal
        );
    }

    #[test]
    fn lists_questions_of_a_category_in_id_order() {
        let result = show_category_questions(1, &sample_repo()).unwrap();
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.current_category, "Science");
        let ids: Vec<i32> = result.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_known_category_is_not_an_error() {
        let result = show_category_questions(2, &sample_repo()).unwrap();
        assert!(result.questions.is_empty());
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.current_category, "Art");
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = sample_repo();
        assert_eq!(
            show_category_questions(1000, &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(
            show_category_questions(0, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
