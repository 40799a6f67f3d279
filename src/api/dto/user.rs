//! DTOs for user account endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1, max = 100))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request to log in with existing credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub password: Option<String>,
}

/// Public profile representation.
///
/// The password hash never leaves the service layer; `token` is serialized
/// only in the login response, where it is present.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    /// Profile without the session token.
    pub fn from_user(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            token: None,
        }
    }

    /// Profile including the freshly issued session token.
    pub fn with_token(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            token: user.token,
        }
    }
}
