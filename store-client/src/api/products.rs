//! Product endpoints

use shared::Paginated;
use shared::models::{Product, ProductSize};

use crate::{ClientResult, HttpClient};

/// `GET /products`, `GET /products/{id}`, `GET /products/{id}/sizes`
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl ProductsApi<'_> {
    /// Fetch one page of products
    pub async fn list(&self, page: u32, limit: u32) -> ClientResult<Paginated<Product>> {
        self.http
            .get_query("/products", &[("page", page), ("limit", limit)])
            .await
    }

    /// Fetch a single product
    pub async fn get(&self, id: i64) -> ClientResult<Product> {
        self.http.get(&format!("/products/{id}")).await
    }

    /// Fetch the size rows for a product
    pub async fn sizes(&self, product_id: i64) -> ClientResult<Vec<ProductSize>> {
        self.http.get(&format!("/products/{product_id}/sizes")).await
    }
}
