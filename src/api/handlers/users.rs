//! Handlers for user account endpoints.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::DataBody;
use crate::api::dto::user::{
    LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict when the
/// username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(payload.username, payload.name, payload.password)
        .await?;

    Ok(Json(DataBody {
        data: UserResponse::from_user(user),
    }))
}

/// Authenticates credentials and issues a session token.
///
/// # Endpoint
///
/// `POST /api/users/login`
///
/// # Errors
///
/// Returns 401 Unauthorized with one generic message for both unknown
/// usernames and wrong passwords.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(DataBody {
        data: UserResponse::with_token(user),
    }))
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /api/users/current`
///
/// The auth middleware already resolved the user, so this is a pass-through
/// without another database hit.
pub async fn current_user_handler(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<DataBody<UserResponse>> {
    Json(DataBody {
        data: UserResponse::from_user(user),
    })
}

/// Partially updates the authenticated user's profile.
///
/// # Endpoint
///
/// `PATCH /api/users/current`
///
/// Only fields present in the body are changed; an omitted password keeps
/// the stored hash.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update(&user.username, payload.name, payload.password)
        .await?;

    Ok(Json(DataBody {
        data: UserResponse::from_user(user),
    }))
}

/// Logs the authenticated user out by invalidating the session token.
///
/// # Endpoint
///
/// `DELETE /api/users/current`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<DataBody<UserResponse>>, AppError> {
    let user = state.user_service.logout(&user.username).await?;

    Ok(Json(DataBody {
        data: UserResponse::from_user(user),
    }))
}
