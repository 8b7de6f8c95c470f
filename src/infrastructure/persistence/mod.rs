//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Fixed
//! tables use the compile-time checked macros; per-country tables are queried
//! at runtime through `FromRow` rows, because their names are only known from
//! configuration.
//!
//! # Repositories
//!
//! - [`PgPlaceRepository`] - Per-country place tables
//! - [`PgBusinessRepository`] - Business directory
//! - [`PgPostRepository`] - Published blog posts
//! - [`PgContactRepository`] - Contact form messages

pub mod pg_business_repository;
pub mod pg_contact_repository;
pub mod pg_place_repository;
pub mod pg_post_repository;

pub use pg_business_repository::PgBusinessRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_place_repository::PgPlaceRepository;
pub use pg_post_repository::PgPostRepository;

/// Converts an offset for binding; Postgres has no unsigned 64-bit type.
pub(crate) fn to_db_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// Converts a `COUNT(*)` result back to an unsigned total.
pub(crate) fn from_db_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
