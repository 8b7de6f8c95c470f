//! Handlers for destination and country endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::destination::{CountryResponse, DestinationResponse};
use crate::api::dto::pagination::{DEFAULT_LIST_LIMIT, ListResponse, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists destinations from every country.
///
/// # Endpoint
///
/// `GET /api/destinations?page=1&limit=12`
///
/// A country whose table cannot be read is left out of the listing rather
/// than failing the request.
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "id": "rwanda-0-k3j9x0a1b",
///       "name": "Volcanoes National Park",
///       "description": "...",
///       "image_url": "https://...",
///       "thumbnail_url": "https://...",
///       "country": "Rwanda",
///       "country_slug": "rwanda"
///     }
///   ],
///   "pagination": { "page": 1, "limit": 12, "total": 5, "total_pages": 1 }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a zero page or an out-of-range limit.
pub async fn destination_list_handler(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ListResponse<DestinationResponse>>, AppError> {
    let Query(params) = query?;
    let page = params.to_page_request(DEFAULT_LIST_LIMIT)?;

    let result = state.destination_service.list_destinations(page).await;

    Ok(Json(ListResponse::from_page(result, |d| {
        DestinationResponse::new(d, &state.images)
    })))
}

/// Lists destinations of one country.
///
/// # Endpoint
///
/// `GET /api/countries/{slug}/destinations?page=1&limit=12`
///
/// # Errors
///
/// - 400 Bad Request for invalid pagination
/// - 404 Not Found if no country has this slug
/// - 500 Internal Server Error if the country's table cannot be read
pub async fn country_destinations_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ListResponse<DestinationResponse>>, AppError> {
    let Query(params) = query?;
    let page = params.to_page_request(DEFAULT_LIST_LIMIT)?;

    let result = state
        .destination_service
        .list_by_country(&slug, page)
        .await?;

    Ok(Json(ListResponse::from_page(result, |d| {
        DestinationResponse::new(d, &state.images)
    })))
}

/// Lists the configured countries in display order.
///
/// `GET /api/countries`
pub async fn country_list_handler(State(state): State<AppState>) -> Json<Vec<CountryResponse>> {
    Json(
        state
            .destination_service
            .countries()
            .iter()
            .map(CountryResponse::from)
            .collect(),
    )
}
