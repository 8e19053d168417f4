//! Filter predicates and sort comparators

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::loader::CatalogProduct;

/// Sort key for the catalog grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Preserve backend-provided order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    /// By `min_size`; sizeless products last
    SizeAsc,
    /// By `max_size`; sizeless products last
    SizeDesc,
}

/// Conjunctive filter over the current page
///
/// Unset fields impose no constraint. Filtering never reaches beyond the
/// already-fetched page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub brand_id: Option<i64>,
    pub category_id: Option<i64>,
    /// Exact match against in-stock sizes
    pub size: Option<i32>,
    /// Case-insensitive substring match on the product name
    pub search: String,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: SortKey,
}

impl CatalogFilter {
    /// True when no predicate or sort is active
    pub fn is_neutral(&self) -> bool {
        self.brand_id.is_none()
            && self.category_id.is_none()
            && self.size.is_none()
            && self.search.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.sort == SortKey::Default
    }

    /// Whether a single product passes every active predicate
    pub fn matches(&self, p: &CatalogProduct) -> bool {
        if let Some(brand_id) = self.brand_id
            && p.product.brand_id != brand_id
        {
            return false;
        }

        if let Some(category_id) = self.category_id
            && p.product.category_id != category_id
        {
            return false;
        }

        if !self.search.is_empty() {
            let name = p.product.name.to_lowercase();
            if !name.contains(&self.search.to_lowercase()) {
                return false;
            }
        }

        if let Some(min) = self.min_price
            && p.product.price < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && p.product.price > max
        {
            return false;
        }

        if let Some(size) = self.size
            && !p.available_sizes.contains(&size)
        {
            return false;
        }

        true
    }

    /// Filter and sort one page of enriched products.
    ///
    /// Returns references in filtered order; `SortKey::Default` keeps the
    /// backend order, and all comparators are stable (equal keys retain
    /// relative input order).
    pub fn apply<'a>(&self, products: &'a [CatalogProduct]) -> Vec<&'a CatalogProduct> {
        let mut result: Vec<&CatalogProduct> =
            products.iter().filter(|p| self.matches(p)).collect();
        sort_products(&mut result, self.sort);
        result
    }
}

fn sort_products(products: &mut [&CatalogProduct], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.product.price.cmp(&b.product.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.product.price.cmp(&a.product.price)),
        SortKey::NameAsc => products.sort_by(|a, b| name_cmp(a, b)),
        SortKey::NameDesc => products.sort_by(|a, b| name_cmp(b, a)),
        SortKey::SizeAsc => products.sort_by(|a, b| match (a.min_size, b.min_size) {
            (Some(x), Some(y)) => x.cmp(&y),
            // Sizeless products sort after everything
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::SizeDesc => products.sort_by(|a, b| match (a.max_size, b.max_size) {
            (Some(x), Some(y)) => y.cmp(&x),
            // Sizeless products still sort after everything
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
}

/// Case-insensitive name ordering, raw bytes as tie-break
fn name_cmp(a: &CatalogProduct, b: &CatalogProduct) -> Ordering {
    a.product
        .name
        .to_lowercase()
        .cmp(&b.product.name.to_lowercase())
        .then_with(|| a.product.name.cmp(&b.product.name))
}
