//! Review Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    /// 1..=5 stars
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub product_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub comment: String,
}

/// Update review payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
