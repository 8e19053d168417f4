//! Catalog pipeline
//!
//! One backend page of products flows through three stages:
//!
//! 1. [`loader`] fetches the page plus brands/categories concurrently and
//!    enriches every product with its size rows.
//! 2. [`filter`] narrows the enriched set with ANDed predicates and orders
//!    it with a stable comparator.
//! 3. [`state`] owns the filter, pagination and loaded data, and guards
//!    against stale fetches overwriting newer ones.

pub mod filter;
pub mod loader;
pub mod state;

pub use filter::{CatalogFilter, SortKey};
pub use loader::{CatalogApi, CatalogPage, CatalogProduct, load_page};
pub use state::{CatalogState, GridState};
