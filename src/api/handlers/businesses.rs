//! Handlers for the business directory.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::business::BusinessResponse;
use crate::api::dto::pagination::{DEFAULT_LIST_LIMIT, ListResponse, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists businesses, newest first.
///
/// `GET /api/businesses?page=1&limit=12`
///
/// # Errors
///
/// - 400 Bad Request for invalid pagination
/// - 500 Internal Server Error if the count or the select fails
pub async fn business_list_handler(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ListResponse<BusinessResponse>>, AppError> {
    let Query(params) = query?;
    let page = params.to_page_request(DEFAULT_LIST_LIMIT)?;

    let result = state.business_service.list(page).await?;

    Ok(Json(ListResponse::from_page(result, |b| {
        BusinessResponse::new(b, &state.images)
    })))
}

/// Returns one business.
///
/// `GET /api/businesses/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no business has this id.
pub async fn business_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusinessResponse>, AppError> {
    let business = state
        .business_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Business not found", json!({ "id": id })))?;

    Ok(Json(BusinessResponse::new(business, &state.images)))
}
