//! Handler for the contact form.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// { "name": "Awa", "email": "awa@example.com", "message": "Hello" }
/// ```
///
/// Fields are trimmed before validation.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or a field is empty,
/// too long, or not a valid email address.
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let Json(payload) = payload?;
    let payload = payload.trimmed();
    payload.validate()?;

    let stored = state
        .contact_service
        .submit(payload.into_new_message())
        .await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}
