//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account that owns contacts
//! - [`Contact`] - A single contact record, always owned by one user
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and mutation:
//! - `NewUser`, `NewContact` - For creating new records
//! - `UserPatch` - For partial updates (`None` = leave unchanged)
//! - `ContactData` - For full-replace contact updates
//! - `ContactFilter` - Optional search filters, combined with AND

pub mod contact;
pub mod user;

pub use contact::{Contact, ContactData, ContactFilter, NewContact};
pub use user::{NewUser, User, UserPatch};
