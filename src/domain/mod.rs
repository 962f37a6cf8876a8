//! Domain entities and the value types they are built from.

pub mod category;
pub mod question;
pub mod types;
