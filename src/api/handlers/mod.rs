//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod businesses;
pub mod contact;
pub mod destinations;
pub mod health;
pub mod posts;

pub use auth::{callback_handler, login_handler, logout_handler, me_handler};
pub use businesses::{business_handler, business_list_handler};
pub use contact::contact_handler;
pub use destinations::{country_destinations_handler, country_list_handler, destination_list_handler};
pub use health::health_handler;
pub use posts::{post_by_id_handler, post_by_slug_handler, post_list_handler, post_slugs_handler};
