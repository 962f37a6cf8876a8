use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::{CategoryId, QuestionId};

pub mod category;
pub mod errors;
pub mod question;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers. Every method checks out its own
/// connection, which goes back to the pool when the call returns.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// A one-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows preceding this page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Query parameters used when listing or searching questions.
///
/// Results are always ordered by question id.
#[derive(Debug, Clone, Default)]
pub struct QuestionListQuery {
    /// Restrict to a single category.
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring of the question text.
    pub search: Option<String>,
    /// Question ids to leave out.
    pub exclude: Vec<QuestionId>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl QuestionListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn exclude(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.exclude.extend(ids);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by id.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Read-only operations for question entities.
pub trait QuestionReader {
    /// List questions matching the query, returning the total count before
    /// pagination alongside the requested window.
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)>;
    /// Retrieve a question by its identifier.
    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>>;
}

/// Write operations for question entities.
pub trait QuestionWriter {
    /// Persist a new question.
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<usize>;
    /// Delete a question by id.
    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize>;
}
