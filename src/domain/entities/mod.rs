//! Core domain entities representing the site's data model.
//!
//! Entities are plain data structures. Row mapping lives in the
//! infrastructure layer; presentation lives in `crate::api::dto`.
//!
//! # Entity Types
//!
//! - [`Place`] - A raw row from one per-country table
//! - [`AggregatedDestination`] - A place tagged with its country and a synthesized id
//! - [`CountrySource`] / [`CountryCatalog`] - The configured per-country tables
//! - [`Business`] - A directory listing
//! - [`Post`] - A blog article
//! - [`ContactMessage`] - A message submitted through the contact form
//! - [`Principal`] / [`Session`] - Identity provider results
//! - [`PageRequest`] / [`PaginatedResult`] - Offset pagination input and output

pub mod business;
pub mod contact;
pub mod country;
pub mod pagination;
pub mod place;
pub mod post;
pub mod principal;

pub use business::Business;
pub use contact::{ContactMessage, NewContactMessage};
pub use country::{CatalogError, CountryCatalog, CountrySource};
pub use pagination::{PageRequest, PaginatedResult};
pub use place::{AggregatedDestination, Place};
pub use post::Post;
pub use principal::{Principal, Session};
