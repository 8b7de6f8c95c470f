//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, BusinessService, ContactService, DestinationService, PostService,
};
use crate::domain::identity::IdentityProvider;
use crate::domain::repositories::{
    BusinessRepository, ContactRepository, PlaceRepository, PostRepository,
};
use crate::utils::image_url::ImageUrls;

/// Services are held behind trait objects so tests can swap the backing
/// repositories and identity provider.
#[derive(Clone)]
pub struct AppState {
    pub destination_service: Arc<DestinationService<dyn PlaceRepository>>,
    pub business_service: Arc<BusinessService<dyn BusinessRepository>>,
    pub post_service: Arc<PostService<dyn PostRepository>>,
    pub contact_service: Arc<ContactService<dyn ContactRepository>>,
    pub auth_service: Arc<AuthService<dyn IdentityProvider>>,
    pub images: ImageUrls,
    /// Adds `Secure` to session cookies when the site is served over HTTPS.
    pub secure_cookies: bool,
}
