use serde::Serialize;

use crate::domain::question::Question;
use crate::dto::categories::CategoryMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.get(),
            question: value.question,
            answer: value.answer,
            category: value.category.get(),
            difficulty: value.difficulty,
        }
    }
}

/// One page of the full question list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Questions matching a search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Every question of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
}
