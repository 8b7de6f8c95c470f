//! Business directory service.

use std::sync::Arc;

use crate::domain::entities::{Business, PageRequest, PaginatedResult};
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;

/// Service for paginated directory listings and single-business lookups.
pub struct BusinessService<R: BusinessRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BusinessRepository + ?Sized> BusinessService<R> {
    /// Creates a new business service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of businesses, newest first.
    ///
    /// Count and select run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either query fails.
    pub async fn list(&self, page: PageRequest) -> Result<PaginatedResult<Business>, AppError> {
        let (total, items) = tokio::try_join!(
            self.repository.count(),
            self.repository.list(page.offset(), page.limit())
        )?;

        Ok(PaginatedResult::new(items, total, page))
    }

    /// Looks up one business. `Ok(None)` means no such business.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Total number of businesses. Doubles as the health check's database probe.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }
}
