//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements with bind parameters.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and token lookup
//! - [`PgContactRepository`] - Owner-scoped contact storage and search

pub mod pg_contact_repository;
pub mod pg_user_repository;

pub use pg_contact_repository::PgContactRepository;
pub use pg_user_repository::PgUserRepository;
