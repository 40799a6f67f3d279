//! DTOs for contact endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{Contact, ContactData, ContactFilter};
use crate::error::AppError;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_SIZE: u32 = 10;
const MAX_SIZE: u32 = 100;

/// Request body for creating a contact or fully replacing one on update.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(email, length(max = 100))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
}

impl From<ContactRequest> for ContactData {
    fn from(request: ContactRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// JSON representation of a contact.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

/// Query parameters for contact search.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SearchContactsParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<u32>,
}

impl SearchContactsParams {
    /// Validates paging parameters and applies defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `size`: 10
    ///
    /// # Validation
    ///
    /// - `page` must be >= 1
    /// - `size` must be between 1 and 100
    pub fn validate_paging(&self) -> Result<(i64, i64), AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let size = self.size.unwrap_or(DEFAULT_SIZE);

        if page == 0 {
            return Err(AppError::bad_request("page must be greater than 0"));
        }

        if size == 0 || size > MAX_SIZE {
            return Err(AppError::bad_request(format!(
                "size must be between 1 and {MAX_SIZE}"
            )));
        }

        Ok((i64::from(page), i64::from(size)))
    }

    /// Extracts the free-text filters.
    pub fn into_filter(self) -> ContactFilter {
        ContactFilter {
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Paging metadata describing a windowed result set.
#[derive(Debug, Serialize)]
pub struct Paging {
    pub current_page: i64,
    pub total_page: i64,
    pub size: i64,
}

/// Search response: one page of contacts plus paging metadata.
#[derive(Debug, Serialize)]
pub struct SearchContactsResponse {
    pub data: Vec<ContactResponse>,
    pub paging: Paging,
}
