//! Domain layer containing entities and data access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`identity`] - Contract with the external identity provider
//!
//! # Destination Aggregation Flow
//!
//! 1. Handler builds a [`entities::PageRequest`]
//! 2. [`crate::application::services::DestinationService`] reads every
//!    [`entities::CountrySource`] concurrently through [`repositories::PlaceRepository`]
//! 3. Failed sources contribute zero rows; the rest are concatenated in
//!    declaration order
//! 4. The page is sliced out of the concatenated snapshot

pub mod entities;
pub mod identity;
pub mod repositories;
