#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tourism_directory::application::services::{
    AuthService, BusinessService, ContactService, DestinationService, PostService,
};
use tourism_directory::domain::entities::{CountryCatalog, Principal, Session};
use tourism_directory::domain::identity::IdentityProvider;
use tourism_directory::domain::repositories::{
    BusinessRepository, ContactRepository, PlaceRepository, PostRepository,
};
use tourism_directory::error::AppError;
use tourism_directory::infrastructure::persistence::{
    PgBusinessRepository, PgContactRepository, PgPlaceRepository, PgPostRepository,
};
use tourism_directory::state::AppState;
use tourism_directory::utils::image_url::ImageUrls;
use tourism_directory::utils::row_id::RowIdMode;

pub const VALID_CODE: &str = "good-code";
pub const VALID_TOKEN: &str = "valid-token";

/// Identity provider that accepts exactly one code and one token.
pub struct FakeIdentity;

pub fn test_principal() -> Principal {
    Principal {
        id: "user-1".to_string(),
        email: Some("traveler@example.com".to_string()),
        name: Some("Amani".to_string()),
        avatar_url: None,
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    fn authorize_url(&self, provider: &str, redirect_to: &str, code_challenge: &str) -> String {
        format!(
            "https://id.test/authorize?provider={provider}&redirect_to={redirect_to}&code_challenge={code_challenge}"
        )
    }

    async fn exchange_code(&self, code: &str, code_verifier: &str) -> Result<Session, AppError> {
        if code == VALID_CODE && !code_verifier.is_empty() {
            Ok(Session {
                access_token: VALID_TOKEN.to_string(),
                refresh_token: Some("refresh".to_string()),
                expires_in: Some(3600),
                principal: test_principal(),
            })
        } else {
            Err(AppError::unauthorized(
                "Authorization code rejected",
                json!({}),
            ))
        }
    }

    async fn current_principal(&self, access_token: &str) -> Result<Principal, AppError> {
        if access_token == VALID_TOKEN {
            Ok(test_principal())
        } else {
            Err(AppError::unauthorized("Unauthorized", json!({})))
        }
    }
}

pub async fn create_test_place(pool: &PgPool, table: &str, name: &str) {
    let sql = format!(
        r#"INSERT INTO "{table}" (places, "desc", image_url) VALUES ($1, $2, $3)"#
    );
    sqlx::query(&sql)
        .bind(name)
        .bind(format!("About {name}"))
        .bind(format!("{}.jpg", name.to_lowercase().replace(' ', "-")))
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a business created `age_days` days ago and returns its id.
pub async fn create_test_business(pool: &PgPool, name: &str, age_days: i32) -> String {
    sqlx::query_scalar(
        "INSERT INTO businesses (name, category, created_at)
         VALUES ($1, 'lodge', NOW() - make_interval(days => $2))
         RETURNING id::text",
    )
    .bind(name)
    .bind(age_days)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a post; `published_days_ago = None` creates a draft. Returns its id.
pub async fn create_test_post(pool: &PgPool, slug: &str, published_days_ago: Option<i32>) -> String {
    sqlx::query_scalar(
        "INSERT INTO posts (slug, title, excerpt, content, published_at)
         VALUES ($1, $2, 'Excerpt', 'Body',
                 CASE WHEN $3::int IS NULL THEN NULL ELSE NOW() - make_interval(days => $3) END)
         RETURNING id::text",
    )
    .bind(slug)
    .bind(format!("Title {slug}"))
    .bind(published_days_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_contact_messages(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with(pool, CountryCatalog::default(), RowIdMode::Random)
}

pub fn create_test_state_with(pool: PgPool, catalog: CountryCatalog, id_mode: RowIdMode) -> AppState {
    let pool = Arc::new(pool);

    let place_repo: Arc<dyn PlaceRepository> = Arc::new(PgPlaceRepository::new(pool.clone()));
    let business_repo: Arc<dyn BusinessRepository> =
        Arc::new(PgBusinessRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PgPostRepository::new(pool.clone()));
    let contact_repo: Arc<dyn ContactRepository> = Arc::new(PgContactRepository::new(pool));
    let identity: Arc<dyn IdentityProvider> = Arc::new(FakeIdentity);

    AppState {
        destination_service: Arc::new(DestinationService::new(place_repo, catalog, id_mode)),
        business_service: Arc::new(BusinessService::new(business_repo)),
        post_service: Arc::new(PostService::new(post_repo)),
        contact_service: Arc::new(ContactService::new(contact_repo)),
        auth_service: Arc::new(AuthService::new(identity, "http://localhost:3000")),
        images: ImageUrls::new("demo"),
        secure_cookies: false,
    }
}
