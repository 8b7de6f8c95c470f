//! PostgreSQL implementation of the business repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::{from_db_count, to_db_offset};
use crate::domain::entities::Business;
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;

/// PostgreSQL repository for the business directory.
///
/// Listings are ordered newest first with `id` as tiebreaker, so offset pages
/// never overlap when timestamps are equal.
pub struct PgBusinessRepository {
    pool: Arc<PgPool>,
}

impl PgBusinessRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn list(&self, offset: u64, limit: u32) -> Result<Vec<Business>, AppError> {
        let businesses = sqlx::query_as!(
            Business,
            r#"
            SELECT id::text AS "id!", name, places, description, address, phone, email,
                   website, category, image_url, created_at, updated_at
            FROM businesses
            ORDER BY created_at DESC NULLS LAST, id
            LIMIT $1 OFFSET $2
            "#,
            i64::from(limit),
            to_db_offset(offset)
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(businesses)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count = sqlx::query_scalar!(r#"SELECT COUNT(*) AS "count!" FROM businesses"#)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(from_db_count(count))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        let business = sqlx::query_as!(
            Business,
            r#"
            SELECT id::text AS "id!", name, places, description, address, phone, email,
                   website, category, image_url, created_at, updated_at
            FROM businesses
            WHERE id::text = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(business)
    }
}
