//! Storefront view-model layer
//!
//! The browser-side state of the shoe store: the catalog pipeline
//! (load, enrich, filter, sort, paginate), the application context
//! (session, theme, notifications) and role-gated route resolution.
//!
//! Rendering is out of scope; every type here is a plain state holder
//! a UI layer can read from and write to.

pub mod catalog;
pub mod context;
pub mod routes;

pub use catalog::{
    CatalogApi, CatalogFilter, CatalogPage, CatalogProduct, CatalogState, GridState, SortKey,
};
pub use context::{AppContext, Notification, NotificationLevel, Session, Theme};
pub use routes::{Route, RouteDecision, resolve_route};
