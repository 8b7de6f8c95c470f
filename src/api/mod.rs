//! HTTP surface of the directory: JSON endpoints under `/api` and the
//! sign-in flow under `/auth`.
//!
//! - [`dto`] - Response shapes and query parameters
//! - [`handlers`] - One handler per endpoint
//! - [`middleware`] - Session lookup, per-IP rate limits, request tracing
//! - [`routes`] - Router groups, assembled in [`crate::routes`]

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
