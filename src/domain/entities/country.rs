//! Per-country source configuration.

/// One per-country table treated as an independent data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySource {
    /// Table identifier in the database. May be mixed case (e.g. `Rwanda`).
    pub table: String,
    /// Display name attached to every row.
    pub name: String,
    /// Lowercase routing key.
    pub slug: String,
}

impl CountrySource {
    pub fn new(table: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Returns the table name as a quoted SQL identifier.
    ///
    /// Table names cannot be bound as parameters, so the identifier is wrapped
    /// in double quotes with embedded quotes doubled.
    pub fn quoted_table(&self) -> String {
        format!("\"{}\"", self.table.replace('"', "\"\""))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("country source entry '{0}' must have the form table:name:slug")]
    MalformedEntry(String),
    #[error("country slug '{0}' must be lowercase ascii letters, digits or '-'")]
    InvalidSlug(String),
    #[error("country slug '{0}' is declared more than once")]
    DuplicateSlug(String),
    #[error("at least one country source must be configured")]
    Empty,
}

/// Ordered set of configured country sources.
///
/// Declaration order is the concatenation order of aggregated listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCatalog {
    sources: Vec<CountrySource>,
}

impl CountryCatalog {
    /// Builds a catalog, rejecting empty lists, malformed slugs and duplicates.
    pub fn new(sources: Vec<CountrySource>) -> Result<Self, CatalogError> {
        if sources.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(sources.len());
        for source in &sources {
            let valid = !source.slug.is_empty()
                && source
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            if !valid {
                return Err(CatalogError::InvalidSlug(source.slug.clone()));
            }
            if seen.contains(&source.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(source.slug.clone()));
            }
            seen.push(&source.slug);
        }

        Ok(Self { sources })
    }

    /// Parses `table:name:slug` entries separated by commas.
    pub fn parse(entries: &str) -> Result<Self, CatalogError> {
        let sources = entries
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let parts: Vec<&str> = entry.split(':').map(str::trim).collect();
                match parts.as_slice() {
                    [table, name, slug] if !table.is_empty() && !name.is_empty() => {
                        Ok(CountrySource::new(*table, *name, *slug))
                    }
                    _ => Err(CatalogError::MalformedEntry(entry.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(sources)
    }

    /// Finds a source by slug, ignoring ASCII case.
    pub fn find(&self, slug: &str) -> Option<&CountrySource> {
        self.sources
            .iter()
            .find(|s| s.slug.eq_ignore_ascii_case(slug))
    }

    pub fn sources(&self) -> &[CountrySource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self {
            sources: vec![
                CountrySource::new("Rwanda", "Rwanda", "rwanda"),
                CountrySource::new("benin", "benin", "benin"),
            ],
        }
    }
}
