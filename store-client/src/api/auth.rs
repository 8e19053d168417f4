//! Auth endpoints

use shared::models::User;
use shared::{LoginRequest, LoginResponse, RegisterRequest};

use crate::{ClientResult, HttpClient};

/// `POST /login`, `POST /register`
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl AuthApi<'_> {
    /// Log in with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post("/login", &request).await
    }

    /// Register a new customer account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        self.http.post("/register", request).await
    }
}
