//! Request middleware.
//!
//! [`auth`] resolves the signed-in user, [`rate_limit`] throttles per client
//! IP, and [`tracing`] wraps every request in a span.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
