//! User entity owning the account credentials.

use sqlx::FromRow;

/// A registered user account.
///
/// `password_hash` holds the bcrypt hash, never the plaintext password.
/// `token` is the opaque session credential: set on login, `NULL` after
/// logout or before the first login.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub token: Option<String>,
}

impl User {
    /// Returns true if the account currently holds a live session token.
    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}

impl UserPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password_hash.is_none()
    }
}
