//! Category endpoints

use shared::models::Category;

use crate::{ClientResult, HttpClient};

/// `GET /categories`, `GET /categories/{id}`
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl CategoriesApi<'_> {
    /// Fetch the full category list (unpaginated)
    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/categories").await
    }

    /// Fetch a single category
    pub async fn get(&self, id: i64) -> ClientResult<Category> {
        self.http.get(&format!("/categories/{id}")).await
    }
}
