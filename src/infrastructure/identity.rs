//! GoTrue-compatible identity provider client.
//!
//! Talks to the hosted auth service that fronts the database
//! (`{base}/auth/v1/...`), authenticating each call with the anon `apikey`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{Principal, Session};
use crate::domain::identity::IdentityProvider;
use crate::error::AppError;

#[derive(Serialize)]
struct PkceGrant<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl From<UserResponse> for Principal {
    fn from(user: UserResponse) -> Self {
        Principal {
            id: user.id,
            email: user.email,
            name: user.user_metadata.full_name.or(user.user_metadata.name),
            avatar_url: user.user_metadata.avatar_url,
        }
    }
}

/// HTTP client for the hosted identity provider.
pub struct SupabaseIdentity {
    client: Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseIdentity {
    /// Creates a client for the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot be built.
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base_path}/auth/v1/{path}"));
        url
    }
}

fn upstream(e: reqwest::Error) -> AppError {
    tracing::warn!(error = %e, "Identity provider request failed");
    AppError::upstream("Identity provider unavailable", json!({}))
}

fn rejected_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND
            | StatusCode::UNPROCESSABLE_ENTITY
    )
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    fn authorize_url(&self, provider: &str, redirect_to: &str, code_challenge: &str) -> String {
        let mut url = self.endpoint("authorize");
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to)
            .append_pair("code_challenge", code_challenge)
            .append_pair("code_challenge_method", "s256");
        url.into()
    }

    async fn exchange_code(&self, code: &str, code_verifier: &str) -> Result<Session, AppError> {
        let mut url = self.endpoint("token");
        url.query_pairs_mut().append_pair("grant_type", "pkce");

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&PkceGrant {
                auth_code: code,
                code_verifier,
            })
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        if rejected_status(status) {
            return Err(AppError::unauthorized(
                "Authorization code rejected",
                json!({ "status": status.as_u16() }),
            ));
        }
        if !status.is_success() {
            return Err(AppError::upstream(
                "Identity provider error",
                json!({ "status": status.as_u16() }),
            ));
        }

        let token: TokenResponse = response.json().await.map_err(upstream)?;

        Ok(Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_in: token.expires_in,
            principal: token.user.into(),
        })
    }

    async fn current_principal(&self, access_token: &str) -> Result<Principal, AppError> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        if rejected_status(status) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired access token" }),
            ));
        }
        if !status.is_success() {
            return Err(AppError::upstream(
                "Identity provider error",
                json!({ "status": status.as_u16() }),
            ));
        }

        let user: UserResponse = response.json().await.map_err(upstream)?;
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url() {
        let identity = SupabaseIdentity::new("https://project.supabase.co/", "anon").unwrap();
        let url = identity.authorize_url("google", "http://localhost:3000/auth/callback", "abc");

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), "/auth/v1/authorize");

        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("provider".into(), "google".into())));
        assert!(pairs.contains(&(
            "redirect_to".into(),
            "http://localhost:3000/auth/callback".into()
        )));
        assert!(pairs.contains(&("code_challenge_method".into(), "s256".into())));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let identity = SupabaseIdentity::new("http://localhost:54321/gateway", "anon").unwrap();
        assert_eq!(
            identity.endpoint("user").as_str(),
            "http://localhost:54321/gateway/auth/v1/user"
        );
    }

    #[test]
    fn test_user_metadata_mapping() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": "u1",
            "email": "a@b.c",
            "user_metadata": { "full_name": "Amani K", "avatar_url": "https://img/a.png" }
        }))
        .unwrap();
        let principal = Principal::from(user);

        assert_eq!(principal.id, "u1");
        assert_eq!(principal.name.as_deref(), Some("Amani K"));
        assert_eq!(principal.avatar_url.as_deref(), Some("https://img/a.png"));
    }

    #[test]
    fn test_user_without_metadata() {
        let user: UserResponse = serde_json::from_value(json!({ "id": "u2" })).unwrap();
        let principal = Principal::from(user);
        assert!(principal.email.is_none());
        assert!(principal.name.is_none());
    }
}
