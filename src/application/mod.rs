//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers, coordinating credential handling, ownership scoping, and
//! pagination.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration, login, profile updates, logout
//! - [`services::contact_service::ContactService`] - Owner-scoped contact CRUD and search

pub mod services;
