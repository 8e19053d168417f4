//! Brand endpoints

use shared::models::Brand;

use crate::{ClientResult, HttpClient};

/// `GET /brands`, `GET /brands/{id}`
#[derive(Debug, Clone, Copy)]
pub struct BrandsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl BrandsApi<'_> {
    /// Fetch the full brand list (unpaginated)
    pub async fn list(&self) -> ClientResult<Vec<Brand>> {
        self.http.get("/brands").await
    }

    /// Fetch a single brand
    pub async fn get(&self, id: i64) -> ClientResult<Brand> {
        self.http.get(&format!("/brands/{id}")).await
    }
}
