//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so services can be exercised against
//! mocks or in-memory fakes. PostgreSQL implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`PlaceRepository`] - Reads from per-country place tables
//! - [`BusinessRepository`] - Business directory listings
//! - [`PostRepository`] - Published blog posts
//! - [`ContactRepository`] - Contact form messages
//!
//! # Absent vs. failed
//!
//! Point lookups return `Ok(None)` when no row matches and `Err` only when the
//! query itself failed.

pub mod business_repository;
pub mod contact_repository;
pub mod place_repository;
pub mod post_repository;

pub use business_repository::BusinessRepository;
pub use contact_repository::ContactRepository;
pub use place_repository::PlaceRepository;
pub use post_repository::PostRepository;

#[cfg(test)]
pub use business_repository::MockBusinessRepository;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use place_repository::MockPlaceRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
