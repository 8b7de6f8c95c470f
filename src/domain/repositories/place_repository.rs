//! Repository trait for per-country place tables.

use crate::domain::entities::{CountrySource, Place};
use crate::error::AppError;
use async_trait::async_trait;

/// Reads `places`, `desc` and `image_url` from one configured country table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlaceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Reads every row of the source table, without a server-side limit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the table cannot be read.
    async fn fetch_all(&self, source: &CountrySource) -> Result<Vec<Place>, AppError>;

    /// Reads at most `limit` rows starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the table cannot be read.
    async fn fetch_range(
        &self,
        source: &CountrySource,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Place>, AppError>;

    /// Counts the rows of the source table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the table cannot be read.
    async fn count(&self, source: &CountrySource) -> Result<u64, AppError>;
}
