//! DTOs for the business directory.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Business;
use crate::utils::image_url::ImageUrls;

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub id: String,
    /// `name`, or `places` when the name is blank.
    pub name: Option<String>,
    pub places: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BusinessResponse {
    pub fn new(business: Business, images: &ImageUrls) -> Self {
        let thumbnail_url = images.thumbnail(business.image_url.as_deref(), None);
        let name = business.display_name().map(str::to_string);

        Self {
            id: business.id,
            name,
            places: business.places,
            description: business.description,
            address: business.address,
            phone: business.phone,
            email: business.email,
            website: business.website,
            category: business.category,
            image_url: business.image_url,
            thumbnail_url,
            created_at: business.created_at,
            updated_at: business.updated_at,
        }
    }
}
