//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod auth;
pub mod business;
pub mod contact;
pub mod destination;
pub mod health;
pub mod pagination;
pub mod post;
