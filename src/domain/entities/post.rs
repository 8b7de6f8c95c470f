//! Blog post entity.

use chrono::{DateTime, Utc};

/// A blog article. Only posts with `published_at` set are visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}
