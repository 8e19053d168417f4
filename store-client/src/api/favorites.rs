//! Favorites endpoints

use shared::models::{Favorite, FavoriteAdd, FavoriteItems};

use crate::{ClientResult, HttpClient};

/// `GET /favorites/{user_id}`, `POST /favorites`, `DELETE /favorites/{id}`
#[derive(Debug, Clone, Copy)]
pub struct FavoritesApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl FavoritesApi<'_> {
    /// Fetch a user's favorites with joined product info
    pub async fn for_user(&self, user_id: i64) -> ClientResult<FavoriteItems> {
        self.http.get(&format!("/favorites/{user_id}")).await
    }

    /// Add a sized product to favorites
    pub async fn add(&self, payload: &FavoriteAdd) -> ClientResult<Favorite> {
        self.http.post("/favorites", payload).await
    }

    /// Remove a favorites row
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/favorites/{id}")).await
    }
}
