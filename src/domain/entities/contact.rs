//! Contact entity and search filter types.

use sqlx::FromRow;

/// A contact record owned by exactly one user.
///
/// `username` is the owner reference; every read and write is scoped to it
/// at the query level.
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Input data for creating a new contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Field values that fully replace a contact's base fields on update.
///
/// Unlike [`super::UserPatch`], this is a full-replace payload: `None`
/// overwrites the stored value with `NULL`.
#[derive(Debug, Clone)]
pub struct ContactData {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Optional free-text filters for contact search.
///
/// All provided filters are combined with AND. `name` matches the first
/// or the last name, case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFilter {
    /// Returns true when no filter is set and the search is a plain listing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
