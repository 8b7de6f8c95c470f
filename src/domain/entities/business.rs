//! Business directory entity.

use chrono::{DateTime, Utc};

/// A listing in the business directory.
///
/// `id` is the text form of the table's primary key, so uuid and integer keys
/// are handled the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: Option<String>,
    pub places: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Business {
    /// Creates a business with only an id and name set.
    #[cfg(test)]
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            places: None,
            description: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            category: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Name to show in listings: `name`, falling back to `places`.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.places.as_deref())
    }
}
