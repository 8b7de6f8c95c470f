//! Handlers for published blog posts.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::pagination::{DEFAULT_POST_LIMIT, ListResponse, PaginationParams};
use crate::api::dto::post::{PostResponse, SlugsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists published posts, most recently published first.
///
/// `GET /api/posts?page=1&limit=10`
pub async fn post_list_handler(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ListResponse<PostResponse>>, AppError> {
    let Query(params) = query?;
    let page = params.to_page_request(DEFAULT_POST_LIMIT)?;

    let result = state.post_service.list(page).await?;

    Ok(Json(ListResponse::from_page(result, |p| {
        PostResponse::new(p, &state.images)
    })))
}

/// `GET /api/posts/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown slugs and unpublished drafts.
pub async fn post_by_slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .post_service
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found", json!({ "slug": slug })))?;

    Ok(Json(PostResponse::new(post, &state.images)))
}

/// `GET /api/posts/id/{id}`
pub async fn post_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .post_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))?;

    Ok(Json(PostResponse::new(post, &state.images)))
}

/// Slugs of all published posts.
///
/// `GET /api/posts/slugs`
pub async fn post_slugs_handler(
    State(state): State<AppState>,
) -> Result<Json<SlugsResponse>, AppError> {
    let slugs = state.post_service.published_slugs().await?;
    Ok(Json(SlugsResponse { slugs }))
}
