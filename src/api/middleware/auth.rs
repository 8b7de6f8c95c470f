//! Session authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::utils::cookies::{ACCESS_TOKEN_COOKIE, read_cookie};
use crate::{error::AppError, state::AppState};

/// Resolves the caller to a [`Principal`](crate::domain::entities::Principal).
///
/// # Token Sources
///
/// 1. `Authorization: Bearer <token>` header
/// 2. `access_token` cookie set by the sign-in callback
///
/// The token is checked with the identity provider and the resulting
/// principal is stored in request extensions for handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is present or the identity
/// provider rejects it, and `502 Bad Gateway` if the provider is unreachable.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/me", get(me_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => token,
        Err(_) => read_cookie(&parts.headers, ACCESS_TOKEN_COOKIE).ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Bearer token or session cookie is required" }),
            )
        })?,
    };

    let principal = st.auth_service.current_principal(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
