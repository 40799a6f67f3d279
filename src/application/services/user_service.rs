//! User account service owning the password and token lifecycle.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::{password, token};

/// Service for registration, login, profile updates, and logout.
///
/// Passwords are bcrypt-hashed at `bcrypt_cost` before they reach the
/// repository; plaintext never leaves this service.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    bcrypt_cost: u32,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for DB operations
    /// - `bcrypt_cost` - bcrypt work factor applied to new passwords
    pub fn new(repository: Arc<R>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Registers a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken. The
    /// pre-check keeps the common case friendly; a race between concurrent
    /// registrations is settled by the primary-key constraint, which
    /// surfaces as the same conflict.
    pub async fn register(
        &self,
        username: String,
        name: String,
        plain_password: String,
    ) -> Result<User, AppError> {
        if self
            .repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = password::hash(plain_password, self.bcrypt_cost).await?;

        let user = self
            .repository
            .create(NewUser {
                username,
                name,
                password_hash,
            })
            .await?;

        tracing::info!(username = %user.username, "User registered");

        Ok(user)
    }

    /// Authenticates a username/password pair and issues a session token.
    ///
    /// An unknown username and a wrong password produce the identical
    /// error, so the endpoint cannot be used to enumerate accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the generic message on any
    /// credential failure.
    pub async fn login(
        &self,
        username: String,
        plain_password: String,
    ) -> Result<User, AppError> {
        let Some(user) = self.repository.find_by_username(&username).await? else {
            return Err(AppError::unauthorized("username or password is wrong"));
        };

        if !password::verify(plain_password, user.password_hash.clone()).await? {
            return Err(AppError::unauthorized("username or password is wrong"));
        }

        let session_token = token::generate_token();
        let user = self.repository.set_token(&user.username, &session_token).await?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(user)
    }

    /// Applies a partial profile update; omitted fields stay unchanged.
    ///
    /// A new password is re-hashed before it is stored.
    pub async fn update(
        &self,
        username: &str,
        name: Option<String>,
        plain_password: Option<String>,
    ) -> Result<User, AppError> {
        let password_hash = match plain_password {
            Some(plain) => Some(password::hash(plain, self.bcrypt_cost).await?),
            None => None,
        };

        self.repository
            .update(
                username,
                UserPatch {
                    name,
                    password_hash,
                },
            )
            .await
    }

    /// Ends the current session by clearing the stored token.
    pub async fn logout(&self, username: &str) -> Result<User, AppError> {
        let user = self.repository.clear_token(username).await?;

        tracing::info!(username = %user.username, "User logged out");

        Ok(user)
    }

    /// Resolves an opaque session token to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when no user holds the token.
    pub async fn authenticate(&self, session_token: &str) -> Result<User, AppError> {
        self.repository
            .find_by_token(session_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}
