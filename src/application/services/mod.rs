//! Business logic services for the application layer.

pub mod contact_service;
pub mod user_service;

pub use contact_service::{ContactPage, ContactService};
pub use user_service::UserService;
