//! PostgreSQL implementation of the per-country place repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::{from_db_count, to_db_offset};
use crate::domain::entities::{CountrySource, Place};
use crate::domain::repositories::PlaceRepository;
use crate::error::AppError;

/// Columns every country table exposes. `desc` is a reserved word.
const PLACE_COLUMNS: &str = r#"places, "desc", image_url"#;

#[derive(FromRow)]
struct PlaceRow {
    places: Option<String>,
    desc: Option<String>,
    image_url: Option<String>,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place::new(row.places.unwrap_or_default(), row.desc, row.image_url)
    }
}

/// PostgreSQL repository reading places from configured country tables.
///
/// Table names come from [`CountrySource::quoted_table`]; values are always
/// bound as parameters.
pub struct PgPlaceRepository {
    pool: Arc<PgPool>,
}

impl PgPlaceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn fetch_all(&self, source: &CountrySource) -> Result<Vec<Place>, AppError> {
        let sql = format!("SELECT {PLACE_COLUMNS} FROM {}", source.quoted_table());

        let rows = sqlx::query_as::<_, PlaceRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn fetch_range(
        &self,
        source: &CountrySource,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Place>, AppError> {
        let sql = format!(
            "SELECT {PLACE_COLUMNS} FROM {} LIMIT $1 OFFSET $2",
            source.quoted_table()
        );

        let rows = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(i64::from(limit))
            .bind(to_db_offset(offset))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn count(&self, source: &CountrySource) -> Result<u64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", source.quoted_table());

        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(from_db_count(count))
    }
}
