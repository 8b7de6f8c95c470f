//! Contact form service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Stores contact form submissions and serves the operator CLI.
pub struct ContactService<R: ContactRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores one validated, trimmed message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn submit(&self, message: NewContactMessage) -> Result<ContactMessage, AppError> {
        let stored = self.repository.create(message).await?;

        metrics::counter!("contact_messages_created_total").increment(1);
        tracing::info!(message_id = %stored.id, "Contact message stored");

        Ok(stored)
    }

    /// Lists messages newest first.
    pub async fn list(&self, unread_only: bool, limit: u32) -> Result<Vec<ContactMessage>, AppError> {
        self.repository.list(unread_only, limit).await
    }

    /// Marks one message read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no message has that id.
    pub async fn mark_read(&self, id: &str) -> Result<(), AppError> {
        if self.repository.mark_read(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Contact message not found",
                json!({ "id": id }),
            ))
        }
    }

    /// Marks every unread message read and returns how many changed.
    pub async fn mark_all_read(&self) -> Result<u64, AppError> {
        self.repository.mark_all_read().await
    }
}
