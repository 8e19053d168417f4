//! Database Backup Models (admin)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response to `POST /admin/backup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupResponse {
    pub message: String,
    pub success: bool,
    pub file_path: String,
}

/// One backup file on the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    pub filename: String,
    pub path: String,
    pub size_bytes: i64,
    pub size_mb: f64,
    pub created: DateTime<Utc>,
}

/// Response to `GET /admin/backup/info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupList {
    #[serde(default)]
    pub backup_files: Vec<BackupInfo>,
    pub total_files: u32,
    pub desktop_path: String,
}
