//! Application layer services.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::destination_service::DestinationService`] - Aggregated and per-country destination feeds
//! - [`services::business_service::BusinessService`] - Business directory
//! - [`services::post_service::PostService`] - Published blog posts
//! - [`services::contact_service::ContactService`] - Contact form submissions
//! - [`services::auth_service::AuthService`] - OAuth sign-in through the identity provider

pub mod services;
