//! Cookie helpers for the sign-in flow.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

/// Cookie carrying the identity provider access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Cookie carrying the PKCE verifier between login and callback.
pub const PKCE_VERIFIER_COOKIE: &str = "pkce_verifier";

/// Reads a cookie value from the `Cookie` header.
///
/// Handles several cookies in one header by splitting on semicolons.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds an HttpOnly `Set-Cookie` value scoped to the whole site.
pub fn session_cookie(name: &str, value: &str, max_age_secs: u64, secure: bool) -> Option<HeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}{secure}"
    ))
    .ok()
}

/// Builds a `Set-Cookie` value that removes the cookie.
pub fn expired_cookie(name: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"))
        .unwrap_or_else(|_| HeaderValue::from_static("expired=; Max-Age=0"))
}

/// Accepts only same-site relative paths as a post-login destination.
///
/// Rejects absolute URLs and protocol-relative `//host` forms.
pub fn safe_next_path(next: Option<&str>, default: &str) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => default.to_string(),
    }
}
