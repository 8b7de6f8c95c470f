//! Sign-in service wrapping the external identity provider.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::{Principal, Session};
use crate::domain::identity::IdentityProvider;
use crate::error::AppError;
use crate::utils::pkce;

static PROVIDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]{2,32}$").expect("provider regex is valid"));

/// Where to send the browser to start sign-in, and the verifier to keep.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    pub authorize_url: String,
    pub code_verifier: String,
}

/// Service driving the OAuth code flow against the identity provider.
///
/// The service only generates the PKCE pair and forwards codes and tokens;
/// token validation is the provider's job.
pub struct AuthService<I: IdentityProvider + ?Sized> {
    provider: Arc<I>,
    callback_url: String,
}

impl<I: IdentityProvider + ?Sized> AuthService<I> {
    /// Creates a new auth service.
    ///
    /// `site_url` is the public origin; the provider redirects back to
    /// `{site_url}/auth/callback`.
    pub fn new(provider: Arc<I>, site_url: &str) -> Self {
        Self {
            provider,
            callback_url: format!("{}/auth/callback", site_url.trim_end_matches('/')),
        }
    }

    /// Starts sign-in with the named OAuth provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the provider name is malformed.
    pub fn start_login(&self, provider: &str) -> Result<LoginRedirect, AppError> {
        if !PROVIDER_REGEX.is_match(provider) {
            return Err(AppError::bad_request(
                "Invalid OAuth provider",
                json!({ "provider": provider }),
            ));
        }

        let code_verifier = pkce::generate_verifier();
        let challenge = pkce::challenge_for(&code_verifier);
        let authorize_url = self
            .provider
            .authorize_url(provider, &self.callback_url, &challenge);

        Ok(LoginRedirect {
            authorize_url,
            code_verifier,
        })
    }

    /// Exchanges an authorization code for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty code and whatever the
    /// provider reports otherwise.
    pub async fn complete_login(&self, code: &str, code_verifier: &str) -> Result<Session, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::bad_request(
                "Missing authorization code",
                json!({}),
            ));
        }

        let session = self.provider.exchange_code(code, code_verifier).await?;
        tracing::info!(user_id = %session.principal.id, "User signed in");
        Ok(session)
    }

    /// Resolves an access token to the current principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is rejected.
    pub async fn current_principal(&self, access_token: &str) -> Result<Principal, AppError> {
        self.provider.current_principal(access_token).await
    }
}
