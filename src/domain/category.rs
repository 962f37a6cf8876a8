use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryType};

/// A pre-seeded grouping of questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: CategoryType,
}
