//! Repository trait for contact form messages.

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::error::AppError;
use async_trait::async_trait;

/// Access to the `contact_messages` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts one message as a single atomic row insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, AppError>;

    /// Lists messages newest first, optionally only unread ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, unread_only: bool, limit: u32) -> Result<Vec<ContactMessage>, AppError>;

    /// Marks one message read. Returns `false` if no message has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_read(&self, id: &str) -> Result<bool, AppError>;

    /// Marks every unread message read and returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_all_read(&self) -> Result<u64, AppError>;
}
