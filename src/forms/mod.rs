//! Request bodies accepted by the JSON endpoints.

pub mod questions;
pub mod quizzes;
