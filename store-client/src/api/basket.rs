//! Basket endpoints

use shared::models::{BasketAdd, BasketEntry, BasketItems, BasketUpdate};

use crate::{ClientResult, HttpClient};

/// `GET /basket/{user_id}`, `POST /basket`, `PUT /basket/{id}`, `DELETE /basket/{id}`
#[derive(Debug, Clone, Copy)]
pub struct BasketApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl BasketApi<'_> {
    /// Fetch a user's basket with joined product info
    pub async fn for_user(&self, user_id: i64) -> ClientResult<BasketItems> {
        self.http.get(&format!("/basket/{user_id}")).await
    }

    /// Add a sized product to the basket
    pub async fn add(&self, payload: &BasketAdd) -> ClientResult<BasketEntry> {
        self.http.post("/basket", payload).await
    }

    /// Change the quantity of a basket row
    pub async fn update(&self, id: i64, payload: &BasketUpdate) -> ClientResult<BasketEntry> {
        self.http.put(&format!("/basket/{id}"), payload).await
    }

    /// Remove a basket row
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/basket/{id}")).await
    }
}
