//! User profile and password endpoints

use shared::Message;
use shared::models::{User, UserUpdate};
use shared::request::{
    PasswordChangeConfirm, PasswordChangeRequest, PasswordResetConfirm, PasswordResetRequest,
};

use crate::{ClientResult, HttpClient};

/// `GET/PUT /users/{id}` and the `/password/*` flows
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl UsersApi<'_> {
    pub async fn get(&self, id: i64) -> ClientResult<User> {
        self.http.get(&format!("/users/{id}")).await
    }

    pub async fn update(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        self.http.put(&format!("/users/{id}"), payload).await
    }

    /// Start a password change (sends a confirmation code)
    pub async fn change_password(&self, payload: &PasswordChangeRequest) -> ClientResult<Message> {
        self.http.post("/password/change", payload).await
    }

    /// Confirm a password change with the emailed code
    pub async fn confirm_password_change(
        &self,
        payload: &PasswordChangeConfirm,
    ) -> ClientResult<Message> {
        self.http.post("/password/change/confirm", payload).await
    }

    /// Start a password reset (public endpoint, no token needed)
    pub async fn reset_password(&self, payload: &PasswordResetRequest) -> ClientResult<Message> {
        self.http.post("/password/reset", payload).await
    }

    /// Confirm a password reset with the emailed code
    pub async fn confirm_password_reset(
        &self,
        payload: &PasswordResetConfirm,
    ) -> ClientResult<Message> {
        self.http.post("/password/reset/confirm", payload).await
    }
}
