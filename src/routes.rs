//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: database and country sources (public)
//! - `/api/*`        - Listings and contact form (public), `/api/me` (session required)
//! - `/auth/*`       - OAuth sign-in flow
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter for contact and sign-in
//! - **Authentication** - Bearer token or session cookie for `/api/me`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let public = api::routes::public_routes().layer(rate_limit::layer(behind_proxy));

    let contact = api::routes::contact_routes().layer(rate_limit::secure_layer(behind_proxy));

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer(behind_proxy));

    let api_router = Router::new().merge(public).merge(contact).merge(protected);

    let auth_router = api::routes::auth_routes().layer(rate_limit::secure_layer(behind_proxy));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/auth", auth_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
