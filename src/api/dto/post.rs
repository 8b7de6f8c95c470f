//! DTOs for blog posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Post;
use crate::utils::image_url::ImageUrls;

/// Cover images are rendered at article width.
const COVER_WIDTH: u32 = 1200;

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_optimized_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PostResponse {
    pub fn new(post: Post, images: &ImageUrls) -> Self {
        let cover_optimized_url =
            images.optimized(post.cover_image_url.as_deref(), COVER_WIDTH, None);

        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            cover_image_url: post.cover_image_url,
            cover_optimized_url,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SlugsResponse {
    pub slugs: Vec<String>,
}
