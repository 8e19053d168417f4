// storefront/tests/catalog.rs
// Catalog pipeline against a stub backend

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::Paginated;
use shared::models::{Brand, Category, Product, ProductSize};
use store_client::{ClientError, ClientResult};
use storefront::{CatalogApi, CatalogState, GridState, SortKey, catalog::load_page};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Default)]
struct StubApi {
    products: Vec<Product>,
    sizes: HashMap<i64, Vec<ProductSize>>,
    brands: Vec<Brand>,
    categories: Vec<Category>,
    fail_sizes_for: HashSet<i64>,
    fail_products: bool,
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn products(&self, page: u32, limit: u32) -> ClientResult<Paginated<Product>> {
        if self.fail_products {
            return Err(ClientError::Internal("backend down".to_string()));
        }
        Ok(Paginated {
            data: self.products.clone(),
            page,
            limit,
            total: self.products.len() as u64,
            total_pages: 1,
        })
    }

    async fn sizes(&self, product_id: i64) -> ClientResult<Vec<ProductSize>> {
        if self.fail_sizes_for.contains(&product_id) {
            return Err(ClientError::NotFound("no sizes".to_string()));
        }
        Ok(self.sizes.get(&product_id).cloned().unwrap_or_default())
    }

    async fn brands(&self) -> ClientResult<Vec<Brand>> {
        Ok(self.brands.clone())
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

fn product(id: i64, name: &str, price: Decimal, brand_id: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        image_url: None,
        price,
        brand_id,
        category_id: 1,
        description: None,
    }
}

fn size_row(id: i64, product_id: i64, size: i32, quantity: i32) -> ProductSize {
    ProductSize {
        id,
        product_id,
        size,
        quantity,
    }
}

fn stub() -> StubApi {
    init_tracing();
    let mut api = StubApi {
        products: vec![
            product(1, "Nike Air Max", dec!(1000), 1),
            product(2, "Nike Pegasus", dec!(2000), 2),
            product(3, "Adidas Gazelle", dec!(3000), 1),
        ],
        brands: vec![
            Brand {
                id: 1,
                brand_name: "Nike".to_string(),
            },
            Brand {
                id: 2,
                brand_name: "Adidas".to_string(),
            },
        ],
        categories: vec![Category {
            id: 1,
            category_name: "Sneakers".to_string(),
        }],
        ..Default::default()
    };
    api.sizes.insert(
        1,
        vec![
            size_row(10, 1, 40, 3),
            size_row(11, 1, 41, 1),
            size_row(12, 1, 42, 0), // listed, out of stock
        ],
    );
    api.sizes.insert(2, vec![size_row(20, 2, 38, 5)]);
    // Product 3 has no size rows at all
    api
}

#[tokio::test]
async fn load_enriches_products_with_size_bounds() {
    let api = stub();
    let page = load_page(&api, 1, 12).await.unwrap();

    assert_eq!(page.products.len(), 3);

    let first = &page.products[0];
    assert_eq!(first.available_sizes, vec![40, 41]);
    assert_eq!(first.all_sizes, vec![40, 41, 42]);
    // Bounds span every listed size, stocked or not
    assert_eq!(first.min_size, Some(40));
    assert_eq!(first.max_size, Some(42));

    let sizeless = &page.products[2];
    assert!(sizeless.all_sizes.is_empty());
    assert_eq!(sizeless.min_size, None);
    assert_eq!(sizeless.max_size, None);
}

#[tokio::test]
async fn size_options_are_sorted_unique_in_stock_only() {
    let api = stub();
    let page = load_page(&api, 1, 12).await.unwrap();
    // 42 is listed but never in stock, so it is not offered as a filter
    assert_eq!(page.size_options, vec![38, 40, 41]);
}

#[tokio::test]
async fn failed_size_fetch_degrades_that_product_only() {
    let mut api = stub();
    api.fail_sizes_for.insert(1);

    let page = load_page(&api, 1, 12).await.unwrap();
    assert_eq!(page.products.len(), 3);

    let degraded = &page.products[0];
    assert!(degraded.available_sizes.is_empty());
    assert_eq!(degraded.min_size, None);

    // The other products still got their sizes
    assert_eq!(page.products[1].available_sizes, vec![38]);
}

#[tokio::test]
async fn failed_products_fetch_fails_the_load() {
    let mut api = stub();
    api.fail_products = true;
    assert!(load_page(&api, 1, 12).await.is_err());
}

#[tokio::test]
async fn primary_failure_leaves_grid_empty_with_error() {
    let mut api = stub();
    api.fail_products = true;

    let mut state = CatalogState::new();
    assert!(state.refresh(&api).await);

    assert!(state.last_error().is_some());
    assert!(state.loaded().is_none());
    assert!(matches!(state.grid(), GridState::Error(_)));
}

#[tokio::test]
async fn grid_distinguishes_no_data_from_no_matches() {
    init_tracing();
    let mut state = CatalogState::new();

    let empty = StubApi::default();
    state.refresh(&empty).await;
    assert_eq!(state.grid(), GridState::NoData);

    let api = stub();
    state.refresh(&api).await;
    state.set_brand(Some(999));
    assert_eq!(state.grid(), GridState::NoMatches);
}

#[tokio::test]
async fn filtered_grid_renders_matching_products() {
    let api = stub();
    let mut state = CatalogState::new();
    state.refresh(&api).await;

    state.set_brand(Some(1));
    state.set_sort(SortKey::PriceDesc);

    let GridState::Products(products) = state.grid() else {
        panic!("expected products");
    };
    let ids: Vec<i64> = products.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn changing_a_filter_resets_to_page_one() {
    init_tracing();
    let mut state = CatalogState::new();
    state.set_page(3);
    assert_eq!(state.page(), 3);

    state.set_brand(Some(2));
    assert_eq!(state.page(), 1);

    state.set_page(3);
    state.set_search("air");
    assert_eq!(state.page(), 1);

    state.set_page(3);
    state.set_sort(SortKey::NameAsc);
    assert_eq!(state.page(), 1);

    // Page navigation itself does not reset anything
    state.set_page(2);
    assert_eq!(state.page(), 2);
    assert_eq!(state.filter().brand_id, Some(2));
}

#[tokio::test]
async fn stale_load_is_discarded() {
    let api = stub();
    let mut state = CatalogState::new();

    let first = state.begin_load();
    let first_result = load_page(&api, 1, 12).await;

    // A second load supersedes the first before it commits
    let second = state.begin_load();
    let second_result = load_page(&api, 2, 12).await;

    assert!(!state.commit(first, first_result));
    assert!(state.commit(second, second_result));
    assert_eq!(state.page(), 2);
}

#[tokio::test]
async fn filter_change_discards_inflight_load() {
    let api = stub();
    let mut state = CatalogState::new();
    state.set_page(3);

    let seq = state.begin_load();
    let result = load_page(&api, 3, 12).await;

    // The filter changes while the load is still in flight
    state.set_brand(Some(1));
    assert_eq!(state.page(), 1);

    // The commit is stale and must not drag the page back to 3
    assert!(!state.commit(seq, result));
    assert_eq!(state.page(), 1);
    assert!(state.loaded().is_none());
}

#[tokio::test]
async fn commit_after_refresh_clears_previous_error() {
    let mut failing = stub();
    failing.fail_products = true;

    let mut state = CatalogState::new();
    state.refresh(&failing).await;
    assert!(state.last_error().is_some());

    let api = stub();
    state.refresh(&api).await;
    assert!(state.last_error().is_none());
    assert!(state.loaded().is_some());
}
