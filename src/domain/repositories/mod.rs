//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account CRUD and token lookup
//! - [`ContactRepository`] - Owner-scoped contact CRUD and search

pub mod contact_repository;
pub mod user_repository;

pub use contact_repository::ContactRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
