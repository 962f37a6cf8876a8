pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod questions;
pub mod quizzes;
