//! PostgreSQL implementation of the contact message repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// PostgreSQL repository for contact form messages.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as!(
            ContactMessage,
            r#"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id::text AS "id!", name, email, message, read, created_at
            "#,
            message.name,
            message.email,
            message.message
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(created)
    }

    async fn list(&self, unread_only: bool, limit: u32) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as!(
            ContactMessage,
            r#"
            SELECT id::text AS "id!", name, email, message, read, created_at
            FROM contact_messages
            WHERE ($1::bool = false OR read = false)
            ORDER BY created_at DESC, id
            LIMIT $2
            "#,
            unread_only,
            i64::from(limit)
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(messages)
    }

    async fn mark_read(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query!(
            "UPDATE contact_messages SET read = true WHERE id::text = $1",
            id
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read(&self) -> Result<u64, AppError> {
        let result = sqlx::query!("UPDATE contact_messages SET read = true WHERE read = false")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
