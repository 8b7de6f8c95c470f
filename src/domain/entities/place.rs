//! Places read from per-country tables.

use super::country::CountrySource;

/// A row from one per-country table. Sources provide no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, description: Option<String>, image_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            image_url,
        }
    }
}

/// A place tagged with its country and a synthesized id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedDestination {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub country: String,
    pub country_slug: String,
}

impl AggregatedDestination {
    pub fn from_place(place: Place, source: &CountrySource, id: String) -> Self {
        Self {
            id,
            name: place.name,
            description: place.description,
            image_url: place.image_url,
            country: source.name.clone(),
            country_slug: source.slug.clone(),
        }
    }
}
