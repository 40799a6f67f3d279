//! PostgreSQL implementation of the contact repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Contact, ContactData, ContactFilter, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// PostgreSQL repository for contacts.
///
/// Ownership is enforced in every statement's WHERE clause; there is no
/// fetch-then-compare path that could race with a concurrent change.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (username, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, first_name, last_name, email, phone
            "#,
        )
        .bind(&new_contact.username)
        .bind(&new_contact.first_name)
        .bind(&new_contact.last_name)
        .bind(&new_contact.email)
        .bind(&new_contact.phone)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(contact)
    }

    async fn find_by_id(&self, owner: &str, id: i64) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(contact)
    }

    async fn update(
        &self,
        owner: &str,
        id: i64,
        data: ContactData,
    ) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6
            WHERE id = $1 AND username = $2
            RETURNING id, username, first_name, last_name, email, phone
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(contact)
    }

    async fn delete(&self, owner: &str, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        owner: &str,
        filter: &ContactFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE username = $1
              AND ($2::text IS NULL
                   OR first_name ILIKE '%' || $2 || '%'
                   OR last_name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR email ILIKE '%' || $3 || '%')
              AND ($4::text IS NULL OR phone ILIKE '%' || $4 || '%')
            ORDER BY id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(owner)
        .bind(&filter.name)
        .bind(&filter.email)
        .bind(&filter.phone)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(contacts)
    }

    async fn count(&self, owner: &str, filter: &ContactFilter) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contacts
            WHERE username = $1
              AND ($2::text IS NULL
                   OR first_name ILIKE '%' || $2 || '%'
                   OR last_name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR email ILIKE '%' || $3 || '%')
              AND ($4::text IS NULL OR phone ILIKE '%' || $4 || '%')
            "#,
        )
        .bind(owner)
        .bind(&filter.name)
        .bind(&filter.email)
        .bind(&filter.phone)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
