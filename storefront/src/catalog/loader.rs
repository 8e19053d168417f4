//! Catalog data loading and enrichment

use std::collections::BTreeSet;

use async_trait::async_trait;
use futures::future::join_all;
use shared::Paginated;
use shared::models::{Brand, Category, Product, ProductSize};
use store_client::{ClientResult, StoreClient};

/// Backend surface the catalog needs
///
/// Implemented by [`StoreClient`]; tests substitute stubs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn products(&self, page: u32, limit: u32) -> ClientResult<Paginated<Product>>;
    async fn sizes(&self, product_id: i64) -> ClientResult<Vec<ProductSize>>;
    async fn brands(&self) -> ClientResult<Vec<Brand>>;
    async fn categories(&self) -> ClientResult<Vec<Category>>;
}

#[async_trait]
impl CatalogApi for StoreClient {
    async fn products(&self, page: u32, limit: u32) -> ClientResult<Paginated<Product>> {
        self.products().list(page, limit).await
    }

    async fn sizes(&self, product_id: i64) -> ClientResult<Vec<ProductSize>> {
        self.products().sizes(product_id).await
    }

    async fn brands(&self) -> ClientResult<Vec<Brand>> {
        self.brands().list().await
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.categories().list().await
    }
}

/// Product enriched with its size data
///
/// Derived fields are recomputed on every load; nothing is memoized
/// across fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub product: Product,
    /// Sizes with stock (`quantity > 0`)
    pub available_sizes: Vec<i32>,
    /// Every listed size, stocked or not
    pub all_sizes: Vec<i32>,
    /// Bounds over `all_sizes`; `None` when the product has no size rows
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
}

impl CatalogProduct {
    fn new(product: Product, sizes: Vec<ProductSize>) -> Self {
        let all_sizes: Vec<i32> = sizes.iter().map(|s| s.size).collect();
        let available_sizes: Vec<i32> =
            sizes.iter().filter(|s| s.in_stock()).map(|s| s.size).collect();
        let min_size = all_sizes.iter().copied().min();
        let max_size = all_sizes.iter().copied().max();

        Self {
            product,
            available_sizes,
            all_sizes,
            min_size,
            max_size,
        }
    }

    /// Product with no size data (size fetch failed or empty)
    fn sizeless(product: Product) -> Self {
        Self {
            product,
            available_sizes: Vec::new(),
            all_sizes: Vec::new(),
            min_size: None,
            max_size: None,
        }
    }
}

/// Everything one catalog load produces
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub products: Vec<CatalogProduct>,
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    /// Sorted unique in-stock sizes on this page, for the size dropdown.
    /// Reflects the current page only, not the whole catalog.
    pub size_options: Vec<i32>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Load one catalog page: products, brands and categories concurrently,
/// then one size request per product.
///
/// A failed size fetch degrades that product to empty size lists; a failed
/// products/brands/categories fetch fails the whole load.
pub async fn load_page(api: &dyn CatalogApi, page: u32, limit: u32) -> ClientResult<CatalogPage> {
    let (product_page, brands, categories) =
        tokio::try_join!(api.products(page, limit), api.brands(), api.categories())?;

    let Paginated {
        data: products,
        page,
        limit,
        total,
        total_pages,
    } = product_page;

    // Fan out one size request per product. The page size is small (12 for
    // the catalog), so no concurrency cap is applied.
    let enriched = join_all(products.into_iter().map(|product| async move {
        match api.sizes(product.id).await {
            Ok(sizes) => CatalogProduct::new(product, sizes),
            Err(err) => {
                tracing::warn!(product_id = product.id, error = %err, "size fetch failed");
                CatalogProduct::sizeless(product)
            }
        }
    }))
    .await;

    let size_options: Vec<i32> = enriched
        .iter()
        .flat_map(|p| p.available_sizes.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    tracing::debug!(
        page,
        products = enriched.len(),
        brands = brands.len(),
        categories = categories.len(),
        total,
        "catalog page loaded"
    );

    Ok(CatalogPage {
        products: enriched,
        brands,
        categories,
        size_options,
        page,
        limit,
        total,
        total_pages,
    })
}
