//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ContactService, UserService};
use crate::infrastructure::persistence::{PgContactRepository, PgUserRepository};

/// Application state cloned into every request handler.
///
/// The pool handle is kept alongside the services for the health check.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub contact_service: Arc<ContactService<PgContactRepository>>,
    pub db: PgPool,
}
