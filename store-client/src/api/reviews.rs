//! Review endpoints

use shared::Paginated;
use shared::models::{Review, ReviewCreate, ReviewUpdate};

use crate::{ClientResult, HttpClient};

/// Review CRUD
#[derive(Debug, Clone, Copy)]
pub struct ReviewsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl ReviewsApi<'_> {
    /// Fetch one page of reviews for a product
    pub async fn for_product(
        &self,
        product_id: i64,
        page: u32,
        limit: u32,
    ) -> ClientResult<Paginated<Review>> {
        self.http
            .get_query(
                &format!("/reviews/product/{product_id}"),
                &[("page", page), ("limit", limit)],
            )
            .await
    }

    /// Fetch one page of reviews written by a user
    pub async fn for_user(
        &self,
        user_id: i64,
        page: u32,
        limit: u32,
    ) -> ClientResult<Paginated<Review>> {
        self.http
            .get_query(
                &format!("/reviews/user/{user_id}"),
                &[("page", page), ("limit", limit)],
            )
            .await
    }

    pub async fn create(&self, payload: &ReviewCreate) -> ClientResult<Review> {
        self.http.post("/reviews", payload).await
    }

    pub async fn update(&self, id: i64, payload: &ReviewUpdate) -> ClientResult<Review> {
        self.http.put(&format!("/reviews/{id}"), payload).await
    }

    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/reviews/{id}")).await
    }
}
