//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers and labels are wrapped so that rows loaded from the store and
//! values received from clients are checked once, at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(QuestionId, "Unique identifier for a question.", "question_id");
id_newtype!(CategoryId, "Unique identifier for a category.", "category_id");

/// Display label of a category, e.g. `History`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryType(String);

impl CategoryType {
    /// Constructs a trimmed, non-empty label.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "category type").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<&str> for CategoryType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Which questions a quiz draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScope {
    /// Every category; clients send category id `0`.
    All,
    Category(CategoryId),
}

impl QuizScope {
    /// The category filter to apply, if any.
    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_labels() {
        let value = CategoryType::new("  History ").unwrap();
        assert_eq!(value, "History");
    }

    #[test]
    fn rejects_blank_category_labels() {
        assert_eq!(
            CategoryType::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("category type")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = QuestionId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("question_id"));
        assert!(CategoryId::new(-3).is_err());
    }

    #[test]
    fn scope_exposes_its_category_filter() {
        assert_eq!(QuizScope::All.category_id(), None);
        let id = CategoryId::new(3).unwrap();
        assert_eq!(QuizScope::Category(id).category_id(), Some(id));
    }
}
