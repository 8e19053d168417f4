//! Store Client - HTTP client for the shoe store backend
//!
//! Thin typed wrapper over the backend REST API. One module per endpoint
//! group, all sharing a single [`HttpClient`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::StoreClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{LoginRequest, LoginResponse, Paginated, RegisterRequest};
