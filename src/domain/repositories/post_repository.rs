//! Repository trait for published blog posts.

use crate::domain::entities::Post;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `posts` table.
///
/// Every method applies the `published_at IS NOT NULL` predicate; drafts are
/// invisible through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists published posts ordered by `published_at` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_published(&self, offset: u64, limit: u32) -> Result<Vec<Post>, AppError>;

    /// Counts published posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_published(&self) -> Result<u64, AppError>;

    /// Finds a published post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;

    /// Finds a published post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_published_by_id(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// Lists the slugs of all published posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn published_slugs(&self) -> Result<Vec<String>, AppError>;
}
