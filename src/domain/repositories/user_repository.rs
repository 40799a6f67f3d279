//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken (the
    /// primary-key constraint settles concurrent registrations).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Finds the user holding the given session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// Applies a partial update; `None` fields in the patch are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `username`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, AppError>;

    /// Stores a fresh session token for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `username`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_token(&self, username: &str, token: &str) -> Result<User, AppError>;

    /// Clears the session token, ending the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `username`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn clear_token(&self, username: &str) -> Result<User, AppError>;
}
