//! Handlers for contact endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::DataBody;
use crate::api::dto::contact::{
    ContactRequest, ContactResponse, Paging, SearchContactsParams, SearchContactsResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a contact owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/contacts`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure.
pub async fn create_contact_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<DataBody<ContactResponse>>, AppError> {
    payload.validate()?;

    let contact = state
        .contact_service
        .create(&user.username, payload.into())
        .await?;

    Ok(Json(DataBody {
        data: ContactResponse::from(contact),
    }))
}

/// Fetches one of the authenticated user's contacts.
///
/// # Endpoint
///
/// `GET /api/contacts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the id is unknown or owned by another user.
pub async fn get_contact_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<DataBody<ContactResponse>>, AppError> {
    let contact = state.contact_service.get(&user.username, id).await?;

    Ok(Json(DataBody {
        data: ContactResponse::from(contact),
    }))
}

/// Fully replaces the base fields of one of the user's contacts.
///
/// # Endpoint
///
/// `PUT /api/contacts/{id}`
///
/// Unlike the user profile PATCH, this is full-replace: omitted optional
/// fields are cleared.
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 404 Not Found when the id
/// is unknown or owned by another user.
pub async fn update_contact_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<DataBody<ContactResponse>>, AppError> {
    payload.validate()?;

    let contact = state
        .contact_service
        .update(&user.username, id, payload.into())
        .await?;

    Ok(Json(DataBody {
        data: ContactResponse::from(contact),
    }))
}

/// Deletes one of the authenticated user's contacts.
///
/// # Endpoint
///
/// `DELETE /api/contacts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the id is unknown or owned by another user.
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<DataBody<&'static str>>, AppError> {
    state.contact_service.delete(&user.username, id).await?;

    Ok(Json(DataBody { data: "OK" }))
}

/// Searches the authenticated user's contacts.
///
/// # Endpoint
///
/// `GET /api/contacts`
///
/// # Query Parameters
///
/// - `name` - substring match on first or last name, case-insensitive
/// - `email` - substring match on email
/// - `phone` - substring match on phone
/// - `page` - 1-indexed page number (default 1)
/// - `size` - page size (default 10, max 100)
///
/// All provided filters are combined with AND.
pub async fn search_contacts_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<SearchContactsParams>,
) -> Result<Json<SearchContactsResponse>, AppError> {
    let (page, size) = params.validate_paging()?;

    let result = state
        .contact_service
        .search(&user.username, params.into_filter(), page, size)
        .await?;

    Ok(Json(SearchContactsResponse {
        data: result.contacts.into_iter().map(ContactResponse::from).collect(),
        paging: Paging {
            current_page: result.current_page,
            total_page: result.total_page,
            size: result.size,
        },
    }))
}
