//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub brand_name: String,
}

/// Create/update brand payload (admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandUpsert {
    pub brand_name: String,
}
