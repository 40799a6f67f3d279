//! Opaque token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the header carrying the raw session token.
pub const API_TOKEN_HEADER: &str = "X-API-TOKEN";

/// The user resolved by the auth middleware, read by handlers from request
/// extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using the `X-API-TOKEN` header.
///
/// # Authentication Flow
///
/// 1. Read the raw token from `X-API-TOKEN`
/// 2. Resolve the user holding that token
/// 3. Attach the resolved [`User`] to the request extensions
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` before any handler runs if:
/// - The header is missing or not valid UTF-8
/// - No user holds the token
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::get};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/users/current", get(current_user_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?
        .to_owned();

    let user = st.user_service.authenticate(&token).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
