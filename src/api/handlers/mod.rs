//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod contacts;
pub mod health;
pub mod users;

pub use contacts::{
    create_contact_handler, delete_contact_handler, get_contact_handler,
    search_contacts_handler, update_contact_handler,
};
pub use health::health_handler;
pub use users::{
    current_user_handler, login_handler, logout_handler, register_handler, update_user_handler,
};
