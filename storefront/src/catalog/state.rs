//! Catalog view state
//!
//! Owns the filter, pagination and the last committed page. Loads are
//! sequence-tagged: the UI calls [`CatalogState::begin_load`], runs
//! [`super::load_page`], then hands the result to
//! [`CatalogState::commit`], which discards anything superseded by a
//! newer `begin_load` in the meantime. Pagination and filter setters
//! invalidate in-flight loads the same way, so a commit racing a
//! setter can never clobber the fresh page/filter state.

use rust_decimal::Decimal;
use store_client::ClientResult;

use super::filter::{CatalogFilter, SortKey};
use super::loader::{CatalogPage, CatalogProduct};

/// Products per catalog page
pub const CATALOG_PAGE_SIZE: u32 = 12;

/// What the product grid should render
#[derive(Debug, Clone, PartialEq)]
pub enum GridState<'a> {
    /// A load is in flight and nothing is committed yet
    Loading,
    /// The last load failed; the grid stays empty
    Error(&'a str),
    /// The backend page itself has no products
    NoData,
    /// Products exist but no filter matched
    NoMatches,
    /// Filtered, sorted products to render
    Products(Vec<&'a CatalogProduct>),
}

/// Catalog view state
#[derive(Debug, Default)]
pub struct CatalogState {
    filter: CatalogFilter,
    page: u32,
    limit: u32,
    loaded: Option<CatalogPage>,
    last_error: Option<String>,
    loading: bool,
    /// Sequence tag of the newest load issued
    load_seq: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: CATALOG_PAGE_SIZE,
            ..Self::default()
        }
    }

    // ========== Load lifecycle ==========

    /// Start a load for the current page; returns the tag to pass to
    /// [`Self::commit`].
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.load_seq
    }

    /// Commit a finished load. Returns `false` when the result was stale
    /// (a newer load was issued after this one started) and was discarded.
    pub fn commit(&mut self, seq: u64, result: ClientResult<CatalogPage>) -> bool {
        if seq != self.load_seq {
            tracing::debug!(seq, newest = self.load_seq, "discarding stale catalog load");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page.page;
                self.loaded = Some(page);
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog load failed");
                self.loaded = None;
                self.last_error = Some(err.to_string());
            }
        }
        true
    }

    /// Drop any in-flight load; its eventual `commit` will be stale.
    fn invalidate(&mut self) {
        self.load_seq += 1;
    }

    /// Convenience: run one load-and-commit cycle against `api`.
    ///
    /// Returns whether the result was applied (it is discarded when a
    /// newer load was issued while this one was in flight). Failures are
    /// kept in state; see [`Self::last_error`] and [`Self::grid`].
    pub async fn refresh(&mut self, api: &dyn super::CatalogApi) -> bool {
        let seq = self.begin_load();
        let result = super::load_page(api, self.page, self.limit).await;
        self.commit(seq, result)
    }

    // ========== Pagination ==========

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> u64 {
        self.loaded.as_ref().map(|p| p.total).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u32 {
        self.loaded.as_ref().map(|p| p.total_pages).unwrap_or(1)
    }

    /// Navigate to a page (1-based). Does not touch the filter.
    /// The caller is expected to trigger a refresh afterwards.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.invalidate();
    }

    /// Change the page size and jump back to the first page.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
        self.invalidate();
    }

    // ========== Filter setters ==========
    // Each resets to page 1 and invalidates in-flight loads.

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn set_brand(&mut self, brand_id: Option<i64>) {
        self.filter.brand_id = brand_id;
        self.reset_page();
    }

    pub fn set_category(&mut self, category_id: Option<i64>) {
        self.filter.category_id = category_id;
        self.reset_page();
    }

    pub fn set_size(&mut self, size: Option<i32>) {
        self.filter.size = size;
        self.reset_page();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.reset_page();
    }

    pub fn set_price_range(&mut self, min: Option<Decimal>, max: Option<Decimal>) {
        self.filter.min_price = min;
        self.filter.max_price = max;
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
        self.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.filter = CatalogFilter::default();
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.page = 1;
        self.invalidate();
    }

    // ========== Derived views ==========

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The committed page, if any
    pub fn loaded(&self) -> Option<&CatalogPage> {
        self.loaded.as_ref()
    }

    /// In-stock size values on the current page, for the size dropdown
    pub fn size_options(&self) -> &[i32] {
        self.loaded
            .as_ref()
            .map(|p| p.size_options.as_slice())
            .unwrap_or(&[])
    }

    /// Filtered, sorted products plus the empty-state distinction
    pub fn grid(&self) -> GridState<'_> {
        if let Some(err) = self.last_error.as_deref() {
            return GridState::Error(err);
        }
        let Some(loaded) = self.loaded.as_ref() else {
            return GridState::Loading;
        };
        if loaded.products.is_empty() {
            return GridState::NoData;
        }

        let visible = self.filter.apply(&loaded.products);
        if visible.is_empty() {
            GridState::NoMatches
        } else {
            GridState::Products(visible)
        }
    }
}
