//! Response envelopes
//!
//! The backend wraps every list endpoint that supports `page`/`limit`
//! in the same pagination envelope.

use serde::{Deserialize, Serialize};

/// Paginated response envelope
///
/// ```json
/// {
///     "data": [ ... ],
///     "page": 1,
///     "limit": 12,
///     "total": 57,
///     "total_pages": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Records for the requested page
    pub data: Vec<T>,
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total record count across all pages
    pub total: u64,
    /// Total page count
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Plain `{"message": ...}` acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}
