//! Contract with the external OAuth identity provider.

use crate::domain::entities::{Principal, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Operations the service needs from the identity provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::SupabaseIdentity`] - GoTrue HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Builds the provider URL that starts an OAuth sign-in with a PKCE challenge.
    fn authorize_url(&self, provider: &str, redirect_to: &str, code_challenge: &str) -> String;

    /// Exchanges an authorization code and its PKCE verifier for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the code is rejected and
    /// [`AppError::Upstream`] if the provider cannot be reached.
    async fn exchange_code(&self, code: &str, code_verifier: &str) -> Result<Session, AppError>;

    /// Resolves an access token to the authenticated principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired and
    /// [`AppError::Upstream`] if the provider cannot be reached.
    async fn current_principal(&self, access_token: &str) -> Result<Principal, AppError>;
}
