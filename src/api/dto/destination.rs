//! DTOs for destination and country endpoints.

use serde::Serialize;

use crate::domain::entities::{AggregatedDestination, CountrySource};
use crate::utils::image_url::ImageUrls;

/// One destination as listed by the aggregated and per-country endpoints.
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: String,
    pub country: String,
    pub country_slug: String,
}

impl DestinationResponse {
    pub fn new(destination: AggregatedDestination, images: &ImageUrls) -> Self {
        let thumbnail_url = images.thumbnail(destination.image_url.as_deref(), None);

        Self {
            id: destination.id,
            name: destination.name,
            description: destination.description,
            image_url: destination.image_url,
            thumbnail_url,
            country: destination.country,
            country_slug: destination.country_slug,
        }
    }
}

/// A configured country. `id` is the slug; `table` is the backing table.
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub table: String,
}

impl From<&CountrySource> for CountryResponse {
    fn from(source: &CountrySource) -> Self {
        Self {
            id: source.slug.clone(),
            name: source.name.clone(),
            slug: source.slug.clone(),
            table: source.table.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_response_uses_slug_as_id() {
        let source = CountrySource::new("Rwanda", "Rwanda", "rwanda");

        let response = CountryResponse::from(&source);

        assert_eq!(response.id, "rwanda");
        assert_eq!(response.slug, "rwanda");
        assert_eq!(response.name, "Rwanda");
        assert_eq!(response.table, "Rwanda");
    }
}
