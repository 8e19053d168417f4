//! Data models
//!
//! Mirrors the backend's JSON shapes. All IDs are `i64`; prices are
//! `rust_decimal::Decimal`.

pub mod backup;
pub mod basket;
pub mod brand;
pub mod category;
pub mod favorite;
pub mod log_entry;
pub mod order;
pub mod product;
pub mod product_size;
pub mod report;
pub mod review;
pub mod user;

// Re-exports
pub use backup::*;
pub use basket::*;
pub use brand::*;
pub use category::*;
pub use favorite::*;
pub use log_entry::*;
pub use order::*;
pub use product::*;
pub use product_size::*;
pub use report::*;
pub use review::*;
pub use user::*;
