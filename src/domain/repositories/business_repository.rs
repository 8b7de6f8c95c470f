//! Repository trait for the business directory.

use crate::domain::entities::Business;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `businesses` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBusinessRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_business.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Lists businesses ordered by `created_at` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: u64, limit: u32) -> Result<Vec<Business>, AppError>;

    /// Counts all businesses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<u64, AppError>;

    /// Finds a business by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Business))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;
}
