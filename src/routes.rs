//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `GET /health` - Database connectivity check (public)
//! - `/api/*`      - REST API; everything except register/login requires
//!   the `X-API-TOKEN` header
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Opaque session token lookup
//! - **Path normalization** - Trailing slash handling

use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;

/// Constructs the application router without the path-normalization
/// wrapper.
///
/// Exposed separately so integration tests can hand a plain [`Router`] to
/// the test server.
pub fn api_router(state: AppState) -> Router {
    let api = api::routes::public_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .with_state(state)
        .layer(tracing::layer())
}

/// Full application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
