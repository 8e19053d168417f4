//! User Model

use serde::{Deserialize, Serialize};

/// User role
///
/// The backend stores roles as numeric ids (1 = admin, 2 = manager,
/// 3 = customer); the enum keeps the numbers at the serde boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Customer,
}

impl Role {
    pub fn as_id(self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Manager => 2,
            Role::Customer => 3,
        }
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> i64 {
        role.as_id()
    }
}

impl TryFrom<i64> for Role {
    type Error = String;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Role::Admin),
            2 => Ok(Role::Manager),
            3 => Ok(Role::Customer),
            other => Err(format!("unknown role id: {other}")),
        }
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(rename = "role_id", default)]
    pub role: Role,
}

/// Create user payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub fullname: String,
    pub email: String,
    /// Plain-text password; the backend hashes it
    #[serde(rename = "password_hash")]
    pub password: String,
    #[serde(rename = "role_id")]
    pub role: Role,
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub fullname: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "role_id", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_numeric_ids() {
        for role in [Role::Admin, Role::Manager, Role::Customer] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "1");
    }

    #[test]
    fn unknown_role_id_is_rejected() {
        assert!(serde_json::from_str::<Role>("7").is_err());
    }

    #[test]
    fn user_deserializes_backend_shape() {
        let user: User = serde_json::from_str(
            r#"{"id":5,"fullname":"Jane Doe","email":"jane@example.com","role_id":2}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Manager);
    }
}
