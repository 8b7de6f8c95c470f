//! Business logic services for the application layer.

pub mod auth_service;
pub mod business_service;
pub mod contact_service;
pub mod destination_service;
pub mod post_service;

pub use auth_service::{AuthService, LoginRedirect};
pub use business_service::BusinessService;
pub use contact_service::ContactService;
pub use destination_service::DestinationService;
pub use post_service::PostService;
