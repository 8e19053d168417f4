//! Shared types for the shoe store client
//!
//! Domain models, request payloads and response envelopes used by both
//! the HTTP client crate and the storefront view-model layer.

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use request::{LoginRequest, LoginResponse, RegisterRequest};
pub use response::{Message, Paginated};
pub use serde::{Deserialize, Serialize};
