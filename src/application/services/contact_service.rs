//! Owner-scoped contact CRUD and paginated search.

use std::sync::Arc;

use crate::domain::entities::{Contact, ContactData, ContactFilter, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// One page of search results plus paging metadata.
#[derive(Debug)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub current_page: i64,
    pub total_page: i64,
    pub size: i64,
}

/// Service for contact management.
///
/// Every operation takes the authenticated owner's username and only
/// touches that user's rows. A contact owned by someone else fails as
/// not-found, so the API never reveals whether a foreign id exists.
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a new contact service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a contact owned by `owner`.
    pub async fn create(&self, owner: &str, data: ContactData) -> Result<Contact, AppError> {
        self.repository
            .create(NewContact {
                username: owner.to_string(),
                first_name: data.first_name,
                last_name: data.last_name,
                email: data.email,
                phone: data.phone,
            })
            .await
    }

    /// Fetches one of the owner's contacts by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown or owned by
    /// another user.
    pub async fn get(&self, owner: &str, id: i64) -> Result<Contact, AppError> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    /// Replaces all base fields of one of the owner's contacts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown or owned by
    /// another user.
    pub async fn update(
        &self,
        owner: &str,
        id: i64,
        data: ContactData,
    ) -> Result<Contact, AppError> {
        self.repository
            .update(owner, id, data)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    /// Deletes one of the owner's contacts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown or owned by
    /// another user.
    pub async fn delete(&self, owner: &str, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(owner, id).await? {
            return Err(AppError::not_found("Contact not found"));
        }

        Ok(())
    }

    /// Runs a filtered, paginated search over the owner's contacts.
    ///
    /// `page` is 1-indexed. `total_page` is the ceiling of the match count
    /// over `size` and is 0 when nothing matches; a page past the end
    /// returns an empty result set with its requested page number.
    pub async fn search(
        &self,
        owner: &str,
        filter: ContactFilter,
        page: i64,
        size: i64,
    ) -> Result<ContactPage, AppError> {
        let offset = (page - 1) * size;

        let contacts = self.repository.search(owner, &filter, size, offset).await?;
        let total = self.repository.count(owner, &filter).await?;

        let total_page = (total + size - 1) / size;

        Ok(ContactPage {
            contacts,
            current_page: page,
            total_page,
            size,
        })
    }
}
