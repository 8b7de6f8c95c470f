//! Handlers for OAuth sign-in.
//!
//! Login stores the PKCE verifier in a short-lived cookie; the callback
//! exchanges the returned code for a session and stores the access token.
//! Any callback failure sends the browser to `/login?error=auth_failed`.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::api::dto::auth::{CallbackParams, LoginParams, MeResponse};
use crate::domain::entities::Principal;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{
    ACCESS_TOKEN_COOKIE, PKCE_VERIFIER_COOKIE, expired_cookie, read_cookie, safe_next_path,
    session_cookie,
};

const DEFAULT_PROVIDER: &str = "google";
const DEFAULT_NEXT: &str = "/dashboard";
const AUTH_FAILED_PATH: &str = "/login?error=auth_failed";

/// Verifier cookie lifetime; the user has this long to finish sign-in.
const PKCE_COOKIE_MAX_AGE: u64 = 600;
const DEFAULT_SESSION_MAX_AGE: u64 = 3600;

/// Starts OAuth sign-in.
///
/// # Endpoint
///
/// `GET /auth/login?provider=google`
///
/// Redirects to the identity provider and sets the `pkce_verifier` cookie.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed provider name.
pub async fn login_handler(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Response, AppError> {
    let provider = params.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);
    let login = state.auth_service.start_login(provider)?;

    let cookie = session_cookie(
        PKCE_VERIFIER_COOKIE,
        &login.code_verifier,
        PKCE_COOKIE_MAX_AGE,
        state.secure_cookies,
    )
    .ok_or_else(|| AppError::internal("Failed to build cookie", json!({})))?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to(&login.authorize_url),
    )
        .into_response())
}

/// Completes OAuth sign-in.
///
/// # Endpoint
///
/// `GET /auth/callback?code=...&next=/dashboard`
///
/// On success sets the `access_token` cookie and redirects to `next`
/// (same-site paths only, `/dashboard` by default).
pub async fn callback_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Response {
    let clear_verifier = (SET_COOKIE, expired_cookie(PKCE_VERIFIER_COOKIE));

    let (Some(code), Some(verifier)) = (params.code, read_cookie(&headers, PKCE_VERIFIER_COOKIE))
    else {
        tracing::warn!("Auth callback without code or verifier");
        return (
            AppendHeaders([clear_verifier]),
            Redirect::to(AUTH_FAILED_PATH),
        )
            .into_response();
    };

    let session = match state.auth_service.complete_login(&code, &verifier).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Auth code exchange failed");
            return (
                AppendHeaders([clear_verifier]),
                Redirect::to(AUTH_FAILED_PATH),
            )
                .into_response();
        }
    };

    let max_age = session.expires_in.unwrap_or(DEFAULT_SESSION_MAX_AGE);
    let Some(token_cookie) = session_cookie(
        ACCESS_TOKEN_COOKIE,
        &session.access_token,
        max_age,
        state.secure_cookies,
    ) else {
        tracing::warn!("Access token is not a valid cookie value");
        return (
            AppendHeaders([clear_verifier]),
            Redirect::to(AUTH_FAILED_PATH),
        )
            .into_response();
    };

    let next = safe_next_path(params.next.as_deref(), DEFAULT_NEXT);

    (
        AppendHeaders([clear_verifier, (SET_COOKIE, token_cookie)]),
        Redirect::to(&next),
    )
        .into_response()
}

/// Clears the session cookie.
///
/// `POST /auth/logout`
pub async fn logout_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, expired_cookie(ACCESS_TOKEN_COOKIE))]),
    )
}

/// Returns the signed-in user.
///
/// `GET /api/me`, behind [`crate::api::middleware::auth::layer`].
pub async fn me_handler(Extension(principal): Extension<Principal>) -> Json<MeResponse> {
    Json(principal.into())
}
