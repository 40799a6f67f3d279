//! Repository trait for owner-scoped contact data access.

use crate::domain::entities::{Contact, ContactData, ContactFilter, NewContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for contacts.
///
/// Every lookup and mutation takes the owning username and applies it as a
/// query predicate (`WHERE id = ? AND username = ?`), so a contact owned by
/// another user is indistinguishable from a missing one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Creates a new contact for its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError>;

    /// Finds a contact by id, scoped to the owner.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the id does not exist or belongs to another user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, owner: &str, id: i64) -> Result<Option<Contact>, AppError>;

    /// Replaces all base fields of an owned contact.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no owned row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        owner: &str,
        id: i64,
        data: ContactData,
    ) -> Result<Option<Contact>, AppError>;

    /// Deletes an owned contact.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a row was deleted, `Ok(false)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, owner: &str, id: i64) -> Result<bool, AppError>;

    /// Lists one page of the owner's contacts matching the filter.
    ///
    /// Results are ordered by `id` ascending so paging is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(
        &self,
        owner: &str,
        filter: &ContactFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, AppError>;

    /// Counts the owner's contacts matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, owner: &str, filter: &ContactFilter) -> Result<i64, AppError>;
}
