use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, QuestionId, QuizScope, TypeConstraintError};

/// Body of `POST /quizzes`.
#[derive(Deserialize, Validate)]
pub struct QuizForm {
    pub previous_questions: Vec<i32>,
    #[validate(nested)]
    pub quiz_category: QuizCategoryForm,
}

/// The `quiz_category` member; `id` 0 stands for every category. Any other
/// members, such as the display `type`, are ignored.
#[derive(Deserialize, Validate)]
pub struct QuizCategoryForm {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 0))]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizFormPayload {
    pub previous_questions: Vec<QuestionId>,
    pub scope: QuizScope,
}

#[derive(Debug, Error)]
pub enum QuizFormError {
    #[error("Quiz form validation failed: {0}")]
    Validation(String),
    #[error("Quiz form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for QuizFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for QuizFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<QuizForm> for QuizFormPayload {
    type Error = QuizFormError;

    fn try_from(value: QuizForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            // Ids that can never exist cannot exclude anything.
            previous_questions: value
                .previous_questions
                .into_iter()
                .filter_map(|id| QuestionId::new(id).ok())
                .collect(),
            scope: match value.quiz_category.id {
                0 => QuizScope::All,
                id => QuizScope::Category(CategoryId::new(id)?),
            },
        })
    }
}
