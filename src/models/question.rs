use diesel::prelude::*;

use crate::domain::question::{NewQuestion as DomainNewQuestion, Question as DomainQuestion};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `questions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Insertable form of [`Question`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl TryFrom<Question> for DomainQuestion {
    type Error = TypeConstraintError;

    fn try_from(question: Question) -> Result<Self, Self::Error> {
        Ok(Self {
            id: question.id.try_into()?,
            question: question.question,
            answer: question.answer,
            category: question.category.try_into()?,
            difficulty: question.difficulty,
        })
    }
}

impl From<DomainNewQuestion> for NewQuestion {
    fn from(question: DomainNewQuestion) -> Self {
        Self {
            question: question.question,
            answer: question.answer,
            category: question.category.get(),
            difficulty: question.difficulty,
        }
    }
}
