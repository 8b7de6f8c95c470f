//! Blog post service.

use std::sync::Arc;

use crate::domain::entities::{PageRequest, PaginatedResult, Post};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Service for published blog posts. Drafts never leave the repository.
pub struct PostService<R: PostRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PostRepository + ?Sized> PostService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of published posts, most recently published first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the count or select fails.
    pub async fn list(&self, page: PageRequest) -> Result<PaginatedResult<Post>, AppError> {
        let (total, items) = tokio::try_join!(
            self.repository.count_published(),
            self.repository.list_published(page.offset(), page.limit())
        )?;

        Ok(PaginatedResult::new(items, total, page))
    }

    /// Looks up a published post by slug. `Ok(None)` means no such post.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        self.repository.find_published_by_slug(slug).await
    }

    /// Looks up a published post by id. `Ok(None)` means no such post.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        self.repository.find_published_by_id(id).await
    }

    /// Slugs of every published post, for prebuilding article pages.
    pub async fn published_slugs(&self) -> Result<Vec<String>, AppError> {
        self.repository.published_slugs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPostRepository;
    use chrono::Utc;
    use serde_json::json;

    fn post(id: &str, slug: &str) -> Post {
        Post {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("Title {id}"),
            excerpt: None,
            content: None,
            cover_image_url: None,
            published_at: Some(Utc::now()),
            created_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_list_uses_published_count() {
        let mut repo = MockPostRepository::new();
        repo.expect_count_published().times(1).returning(|| Ok(2));
        repo.expect_list_published()
            .withf(|offset, limit| *offset == 0 && *limit == 10)
            .times(1)
            .returning(|_, _| Ok(vec![post("1", "a"), post("2", "b")]));

        let service = PostService::new(Arc::new(repo));
        let result = service
            .list(PageRequest::new(None, None, 10).unwrap())
            .await
            .unwrap();

        assert_eq!(result.total, 2);
        assert!(result.items.iter().all(Post::is_published));
    }

    #[tokio::test]
    async fn test_list_propagates_select_failure() {
        let mut repo = MockPostRepository::new();
        repo.expect_count_published().returning(|| Ok(2));
        repo.expect_list_published()
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = PostService::new(Arc::new(repo));
        assert!(service.list(PageRequest::new(None, None, 10).unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn test_get_by_slug_absent_vs_failed() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_published_by_slug()
            .withf(|slug| slug == "gone")
            .returning(|_| Ok(None));
        repo.expect_find_published_by_slug()
            .withf(|slug| slug == "broken")
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = PostService::new(Arc::new(repo));

        assert!(service.get_by_slug("gone").await.unwrap().is_none());
        assert!(matches!(
            service.get_by_slug("broken").await,
            Err(AppError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_published_by_id()
            .returning(|id| Ok(Some(post(id, "safari-tips"))));

        let service = PostService::new(Arc::new(repo));
        let found = service.get_by_id("42").await.unwrap().unwrap();
        assert_eq!(found.id, "42");
        assert_eq!(found.slug, "safari-tips");
    }
}
