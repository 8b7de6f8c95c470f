//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`identity`] - HTTP client for the OAuth identity provider

pub mod identity;
pub mod persistence;
