//! Utility functions shared across layers.
//!
//! - [`row_id`] - Id synthesis for per-country rows
//! - [`image_url`] - Image CDN URL construction
//! - [`pkce`] - PKCE verifier and challenge for the sign-in flow
//! - [`cookies`] - Cookie parsing and `Set-Cookie` construction

pub mod cookies;
pub mod image_url;
pub mod pkce;
pub mod row_id;
