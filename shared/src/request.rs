//! Request payloads
//!
//! Auth and password payloads shared between the client and any caller
//! that builds requests directly. Register and password payloads carry
//! `validator` rules so the UI can reject bad input before the round trip.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

/// Login request body for `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: bearer token plus the full user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Registration request body for `POST /register`
///
/// The backend ignores any submitted role and always creates a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "full name is required"))]
    pub fullname: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    /// Plain-text password; the backend hashes it
    #[serde(rename = "password_hash")]
    #[validate(length(min = 6, message = "password too short"))]
    pub password: String,
}

/// `POST /password/change`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordChangeRequest {
    #[validate(email)]
    pub email: String,
    pub old_password: String,
    #[validate(length(min = 6))]
    pub new_password: String,
}

/// `POST /password/change/confirm`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeConfirm {
    pub email: String,
    pub code: String,
}

/// `POST /password/reset`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email)]
    pub email: String,
}

/// `POST /password/reset/confirm`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetConfirm {
    pub email: String,
    pub code: String,
    #[validate(length(min = 6))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_validates_email() {
        let req = RegisterRequest {
            fullname: "Test User".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            email: "user@example.com".to_string(),
            ..req
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_password_serializes_as_password_hash() {
        let req = RegisterRequest {
            fullname: "Test User".to_string(),
            email: "user@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password_hash"], "secret1");
        assert!(json.get("password").is_none());
    }
}
