//! Typed endpoint groups
//!
//! One module per backend endpoint group. All groups borrow the same
//! [`HttpClient`] held by [`StoreClient`].

pub mod admin;
pub mod auth;
pub mod basket;
pub mod brands;
pub mod categories;
pub mod favorites;
pub mod orders;
pub mod products;
pub mod reports;
pub mod reviews;
pub mod users;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use basket::BasketApi;
pub use brands::BrandsApi;
pub use categories::CategoriesApi;
pub use favorites::FavoritesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use reports::ReportsApi;
pub use reviews::ReviewsApi;
pub use users::UsersApi;

use shared::LoginResponse;

use crate::{ClientConfig, ClientResult, HttpClient};

/// Facade over all endpoint groups
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: HttpClient,
}

impl StoreClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client pointing at a base URL with default settings
    pub fn connect(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ClientConfig::new(base_url))
    }

    /// Log in and keep the returned bearer token for subsequent requests
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self.auth().login(email, password).await?;
        self.http.set_token(response.token.clone());
        Ok(response)
    }

    /// Drop the stored bearer token
    pub fn logout(&mut self) {
        self.http.clear_token();
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    /// Raw HTTP client (escape hatch)
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { http: &self.http }
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { http: &self.http }
    }

    pub fn brands(&self) -> BrandsApi<'_> {
        BrandsApi { http: &self.http }
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi { http: &self.http }
    }

    pub fn basket(&self) -> BasketApi<'_> {
        BasketApi { http: &self.http }
    }

    pub fn favorites(&self) -> FavoritesApi<'_> {
        FavoritesApi { http: &self.http }
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { http: &self.http }
    }

    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi { http: &self.http }
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { http: &self.http }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { http: &self.http }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { http: &self.http }
    }
}
