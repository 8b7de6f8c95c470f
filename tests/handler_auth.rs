mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::{Router, middleware};
use axum_test::TestServer;
use sqlx::PgPool;
use tourism_directory::api;
use tourism_directory::api::middleware::auth;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .nest("/api", protected)
        .nest("/auth", api::routes::auth_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn cookie(value: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("cookie"),
        HeaderValue::from_static(value),
    )
}

fn set_cookies(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[sqlx::test]
async fn test_login_redirects_with_verifier_cookie(pool: PgPool) {
    let server = server(pool);

    let response = server
        .get("/auth/login")
        .add_query_param("provider", "google")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(location.starts_with("https://id.test/authorize?provider=google"));
    assert!(location.contains("redirect_to=http://localhost:3000/auth/callback"));

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("pkce_verifier=") && c.contains("HttpOnly")));
}

#[sqlx::test]
async fn test_login_rejects_bad_provider(pool: PgPool) {
    let server = server(pool);

    let response = server
        .get("/auth/login")
        .add_query_param("provider", "Not A Provider")
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_callback_without_code_fails(pool: PgPool) {
    let server = server(pool);
    let (name, value) = cookie("pkce_verifier=abc");

    let response = server.get("/auth/callback").add_header(name, value).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login?error=auth_failed");
}

#[sqlx::test]
async fn test_callback_without_verifier_fails(pool: PgPool) {
    let server = server(pool);

    let response = server
        .get("/auth/callback")
        .add_query_param("code", common::VALID_CODE)
        .await;

    assert_eq!(response.header("location"), "/login?error=auth_failed");
}

#[sqlx::test]
async fn test_callback_with_rejected_code_fails(pool: PgPool) {
    let server = server(pool);
    let (name, value) = cookie("pkce_verifier=abc");

    let response = server
        .get("/auth/callback")
        .add_query_param("code", "bad-code")
        .add_header(name, value)
        .await;

    assert_eq!(response.header("location"), "/login?error=auth_failed");
    assert!(!set_cookies(&response).iter().any(|c| c.starts_with("access_token=")));
}

#[sqlx::test]
async fn test_callback_success_sets_session(pool: PgPool) {
    let server = server(pool);
    let (name, value) = cookie("pkce_verifier=abc");

    let response = server
        .get("/auth/callback")
        .add_query_param("code", common::VALID_CODE)
        .add_query_param("next", "/favorites")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/favorites");

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=valid-token")));
    assert!(cookies.iter().any(|c| c.starts_with("pkce_verifier=;")));
}

#[sqlx::test]
async fn test_callback_ignores_offsite_next(pool: PgPool) {
    let server = server(pool);
    let (name, value) = cookie("pkce_verifier=abc");

    let response = server
        .get("/auth/callback")
        .add_query_param("code", common::VALID_CODE)
        .add_query_param("next", "//evil.example")
        .add_header(name, value)
        .await;

    assert_eq!(response.header("location"), "/dashboard");
}

#[sqlx::test]
async fn test_me_with_bearer_token(pool: PgPool) {
    let server = server(pool);

    let response = server
        .get("/api/me")
        .authorization_bearer(common::VALID_TOKEN)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "user-1");
    assert_eq!(json["email"], "traveler@example.com");
}

#[sqlx::test]
async fn test_me_with_session_cookie(pool: PgPool) {
    let server = server(pool);
    let (name, value) = cookie("theme=dark; access_token=valid-token");

    let response = server.get("/api/me").add_header(name, value).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Amani");
}

#[sqlx::test]
async fn test_me_requires_session(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/me").await;
    response.assert_status_unauthorized();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "unauthorized"
    );

    let response = server.get("/api/me").authorization_bearer("expired").await;
    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_logout_clears_session(pool: PgPool) {
    let server = server(pool);

    let response = server.post("/auth/logout").await;

    response.assert_status(StatusCode::NO_CONTENT);
    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=;") && c.contains("Max-Age=0")));
}
