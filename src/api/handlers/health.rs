//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 14 businesses" },
///     "country_sources": { "status": "ok", "message": "2 configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let sources_check = check_country_sources(&state);

    let all_healthy = db_check.is_ok() && sources_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            country_sources: sources_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting businesses.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.business_service.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} businesses")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

fn check_country_sources(state: &AppState) -> CheckStatus {
    match state.destination_service.countries().len() {
        0 => CheckStatus::error("No country sources configured"),
        n => CheckStatus::ok(format!("{n} configured")),
    }
}
