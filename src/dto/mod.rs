//! Response payloads rendered by the JSON endpoints.

pub mod categories;
pub mod questions;
