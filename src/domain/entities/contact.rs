//! Contact form messages.

use chrono::{DateTime, Utc};

/// A stored contact message.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a new contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    /// Builds a message with surrounding whitespace removed from every field.
    pub fn trimmed(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}
