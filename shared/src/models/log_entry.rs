//! Audit Log Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit log row (admin-visible user action trail)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: i64,
    /// Action verb, e.g. "CREATE", "UPDATE", "DELETE"
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
