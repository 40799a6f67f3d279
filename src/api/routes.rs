//! API route configuration.
//!
//! Everything under [`protected_routes`] requires `X-API-TOKEN`
//! authentication via [`crate::api::middleware::auth`]; the routes in
//! [`public_routes`] are the only ones reachable without a session.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_contact_handler, current_user_handler, delete_contact_handler, get_contact_handler,
    login_handler, logout_handler, register_handler, search_contacts_handler,
    update_contact_handler, update_user_handler,
};
use crate::state::AppState;

/// Routes reachable without a session token.
///
/// # Endpoints
///
/// - `POST /users`       - Register a new account
/// - `POST /users/login` - Exchange credentials for a session token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register_handler))
        .route("/users/login", post(login_handler))
}

/// Routes requiring a valid session token.
///
/// # Endpoints
///
/// - `GET    /users/current`  - Authenticated user's profile
/// - `PATCH  /users/current`  - Partial profile update
/// - `DELETE /users/current`  - Logout (invalidates the token)
/// - `POST   /contacts`       - Create a contact
/// - `GET    /contacts`       - Filtered, paginated contact search
/// - `GET    /contacts/{id}`  - Fetch a single contact
/// - `PUT    /contacts/{id}`  - Fully replace a contact
/// - `DELETE /contacts/{id}`  - Delete a contact
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/current",
            get(current_user_handler)
                .patch(update_user_handler)
                .delete(logout_handler),
        )
        .route(
            "/contacts",
            post(create_contact_handler).get(search_contacts_handler),
        )
        .route(
            "/contacts/{id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
}
