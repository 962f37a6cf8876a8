use std::num::IntErrorKind;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::question::NewQuestion;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Query string of `GET /questions`.
#[derive(Deserialize, Debug, Default)]
pub struct QuestionsPageQuery {
    pub page: Option<String>,
}

impl QuestionsPageQuery {
    /// Requested page; anything that is not an integer falls back to the first page.
    ///
    /// Integers too large to represent saturate so they still land past the end.
    pub fn page(&self) -> i64 {
        let Some(page) = self.page.as_deref() else {
            return 1;
        };
        match page.trim().parse::<i64>() {
            Ok(page) => page,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        }
    }
}

/// A numeric field exactly as the client sent it: a JSON number or a string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FormNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FormNumber {
    /// The value as a storable integer column, if it is one.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Integer(value) => i32::try_from(*value).ok(),
            Self::Float(_) => None,
            Self::Text(value) => value.trim().parse().ok(),
        }
    }
}

/// Body of `POST /questions`.
///
/// Only presence is checked when the body is read; `difficulty` and
/// `category` are interpreted when the row is built.
#[derive(Deserialize, Debug)]
pub struct AddQuestionForm {
    pub question: String,
    pub answer: String,
    pub difficulty: FormNumber,
    pub category: FormNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddQuestionFormPayload {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl AddQuestionFormPayload {
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddQuestionFormError {
    #[error("Add question form has a non-integer {0}")]
    NotAnInteger(&'static str),
    #[error("Add question form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for AddQuestionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddQuestionForm> for AddQuestionFormPayload {
    type Error = AddQuestionFormError;

    fn try_from(value: AddQuestionForm) -> Result<Self, Self::Error> {
        let difficulty = value
            .difficulty
            .as_i32()
            .ok_or(AddQuestionFormError::NotAnInteger("difficulty"))?;
        let category = value
            .category
            .as_i32()
            .ok_or(AddQuestionFormError::NotAnInteger("category"))?;
        Ok(Self {
            question: value.question,
            answer: value.answer,
            category: CategoryId::new(category)?,
            difficulty,
        })
    }
}

/// Body of `POST /searchTerm`.
#[derive(Deserialize, Debug)]
pub struct SearchQuestionsForm {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
