//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod contact;
pub mod user;

use serde::Serialize;

/// Standard envelope for successful responses: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}
