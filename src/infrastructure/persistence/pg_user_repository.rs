//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user accounts.
///
/// Duplicate usernames are rejected by the primary-key constraint; the
/// unique violation surfaces as [`AppError::Conflict`] through the sqlx
/// error conversion.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING username, name, password_hash, token
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.name)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, name, password_hash, token
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, name, password_hash, token
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                password_hash = COALESCE($3, password_hash)
            WHERE username = $1
            RETURNING username, name, password_hash, token
            "#,
        )
        .bind(username)
        .bind(&patch.name)
        .bind(&patch.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn set_token(&self, username: &str, token: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET token = $2
            WHERE username = $1
            RETURNING username, name, password_hash, token
            "#,
        )
        .bind(username)
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn clear_token(&self, username: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET token = NULL
            WHERE username = $1
            RETURNING username, name, password_hash, token
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or_else(|| AppError::not_found("User not found"))
    }
}
