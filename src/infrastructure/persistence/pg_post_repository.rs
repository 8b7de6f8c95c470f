//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::{from_db_count, to_db_offset};
use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// PostgreSQL repository for published posts.
///
/// Every query filters on `published_at IS NOT NULL`.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list_published(&self, offset: u64, limit: u32) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as!(
            Post,
            r#"
            SELECT id::text AS "id!", slug, title, excerpt, content, cover_image_url,
                   published_at, created_at
            FROM posts
            WHERE published_at IS NOT NULL
            ORDER BY published_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
            i64::from(limit),
            to_db_offset(offset)
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn count_published(&self) -> Result<u64, AppError> {
        let count = sqlx::query_scalar!(
            r#"SELECT COUNT(*) AS "count!" FROM posts WHERE published_at IS NOT NULL"#
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(from_db_count(count))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as!(
            Post,
            r#"
            SELECT id::text AS "id!", slug, title, excerpt, content, cover_image_url,
                   published_at, created_at
            FROM posts
            WHERE slug = $1 AND published_at IS NOT NULL
            "#,
            slug
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn find_published_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as!(
            Post,
            r#"
            SELECT id::text AS "id!", slug, title, excerpt, content, cover_image_url,
                   published_at, created_at
            FROM posts
            WHERE id::text = $1 AND published_at IS NOT NULL
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn published_slugs(&self) -> Result<Vec<String>, AppError> {
        let slugs = sqlx::query_scalar!(
            "SELECT slug FROM posts WHERE published_at IS NOT NULL ORDER BY published_at DESC, id"
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(slugs)
    }
}
