//! DTOs for the contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ContactMessage, NewContactMessage};

/// Contact form submission. Validated after trimming.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1 to 5000 characters"))]
    pub message: String,
}

impl ContactRequest {
    pub fn trimmed(self) -> Self {
        let trimmed = NewContactMessage::trimmed(&self.name, &self.email, &self.message);
        Self {
            name: trimmed.name,
            email: trimmed.email,
            message: trimmed.message,
        }
    }

    pub fn into_new_message(self) -> NewContactMessage {
        NewContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            created_at: message.created_at,
        }
    }
}
