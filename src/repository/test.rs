use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::{CategoryId, QuestionId};
use crate::repository::{
    CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter, RepositoryError,
    RepositoryResult,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    questions: Vec<Question>,
    failing: bool,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            categories,
            questions,
            failing: false,
        }
    }

    /// Make every repository call fail as if the store were unreachable.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.failing {
            Err(RepositoryError::Database(
                diesel::result::Error::RollbackTransaction,
            ))
        } else {
            Ok(())
        }
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.check()?;
        let mut items = self.categories.clone();
        items.sort_by_key(|c| c.id);
        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.check()?;
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

impl QuestionReader for TestRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)> {
        self.check()?;
        let mut items = self.questions.clone();
        items.sort_by_key(|q| q.id);
        if let Some(category_id) = query.category_id {
            items.retain(|q| q.category == category_id);
        }
        if let Some(search) = query.search {
            let search = search.to_lowercase();
            items.retain(|q| q.question.to_lowercase().contains(&search));
        }
        items.retain(|q| !query.exclude.contains(&q.id));
        let total = items.len();
        if let Some(pagination) = query.pagination {
            items = items
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .collect();
        }
        Ok((total, items))
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        self.check()?;
        Ok(self.questions.iter().find(|q| q.id == id).cloned())
    }
}

impl QuestionWriter for TestRepository {
    fn create_question(&self, _question: &NewQuestion) -> RepositoryResult<usize> {
        self.check()?;
        Ok(1)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.questions.iter().filter(|q| q.id == id).count())
    }
}
