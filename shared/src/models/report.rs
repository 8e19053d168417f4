//! Report Models (manager/admin)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored report record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_name: String,
    pub report_type: String,
    /// Serialized report payload (JSON text)
    pub report_data: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Create report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCreate {
    pub report_name: String,
    pub report_type: String,
    pub report_data: String,
    pub user_id: i64,
}

/// Subject of a generated export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSubject {
    Sales,
    Inventory,
    Customers,
    Categories,
}

impl ReportSubject {
    pub fn as_path(self) -> &'static str {
        match self {
            ReportSubject::Sales => "sales",
            ReportSubject::Inventory => "inventory",
            ReportSubject::Customers => "customers",
            ReportSubject::Categories => "categories",
        }
    }
}

/// Export format of a generated report download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
    Text,
}

impl ReportFormat {
    pub fn as_path(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
            ReportFormat::Text => "text",
        }
    }
}
