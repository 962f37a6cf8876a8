use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::QuestionId;
use crate::models::question::{NewQuestion as DbNewQuestion, Question as DbQuestion};
use crate::repository::{
    DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter, RepositoryResult,
};

const LIKE_ESCAPE: char = '\\';

/// Lowercase `term` and wrap it in `%` wildcards, escaping the LIKE
/// metacharacters it contains.
fn substring_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl QuestionReader for DieselRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let pattern = query.search.as_deref().map(substring_pattern);
        let excluded: Vec<i32> = query.exclude.iter().map(|id| id.get()).collect();

        let query_builder = || {
            let mut items = questions::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                items = items.filter(questions::category.eq(category_id.get()));
            }
            // Both sides are lowercased, so non-ASCII letters match regardless of case.
            if let Some(pattern) = &pattern {
                items = items.filter(
                    unicode_lower(questions::question)
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE),
                );
            }
            if !excluded.is_empty() {
                items = items.filter(questions::id.ne_all(excluded.clone()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(questions::id.asc());
        if let Some(pagination) = &query.pagination {
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            items = items
                .offset(offset)
                .limit(pagination.per_page as i64);
        }

        let items = items
            .load::<DbQuestion>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Question>, _>>()?;

        Ok((total, items))
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let question = questions::table
            .filter(questions::id.eq(id.get()))
            .first::<DbQuestion>(&mut conn)
            .optional()?;

        let question = question.map(TryInto::try_into).transpose()?;
        Ok(question)
    }
}

impl QuestionWriter for DieselRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;
        let db_question: DbNewQuestion = question.clone().into();

        let affected = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(questions::table)
                .values(db_question)
                .execute(conn)
        })?;

        Ok(affected)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(questions::table.filter(questions::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
