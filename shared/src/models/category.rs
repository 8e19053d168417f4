//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_name: String,
}

/// Create/update category payload (admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpsert {
    pub category_name: String,
}
