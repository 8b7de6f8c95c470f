//! API route configuration.
//!
//! Route groups are returned unlayered; [`crate::routes::app_router`] attaches
//! rate limiting and authentication per group.

use crate::api::handlers::{
    business_handler, business_list_handler, callback_handler, contact_handler,
    country_destinations_handler, country_list_handler, destination_list_handler, login_handler,
    logout_handler, me_handler, post_by_id_handler, post_by_slug_handler, post_list_handler,
    post_slugs_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public read-only listings.
///
/// # Endpoints
///
/// - `GET /destinations`                    - Destinations from every country
/// - `GET /countries`                       - Configured countries
/// - `GET /countries/{slug}/destinations`   - Destinations of one country
/// - `GET /businesses`                      - Business directory (paginated)
/// - `GET /businesses/{id}`                 - One business
/// - `GET /posts`                           - Published posts (paginated)
/// - `GET /posts/slugs`                     - Slugs of every published post
/// - `GET /posts/id/{id}`                   - One published post by id
/// - `GET /posts/{slug}`                    - One published post by slug
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(destination_list_handler))
        .route("/countries", get(country_list_handler))
        .route(
            "/countries/{slug}/destinations",
            get(country_destinations_handler),
        )
        .route("/businesses", get(business_list_handler))
        .route("/businesses/{id}", get(business_handler))
        .route("/posts", get(post_list_handler))
        // Takes precedence over `/posts/{slug}`; the `slugs` slug is
        // rejected by a table constraint.
        .route("/posts/slugs", get(post_slugs_handler))
        .route("/posts/id/{id}", get(post_by_id_handler))
        .route("/posts/{slug}", get(post_by_slug_handler))
}

/// `POST /contact` - Contact form submission
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}

/// `GET /me` - Signed-in user (session required)
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(me_handler))
}

/// OAuth sign-in, mounted under `/auth`.
///
/// - `GET  /login`    - Redirect to the identity provider
/// - `GET  /callback` - Exchange the authorization code
/// - `POST /logout`   - Clear the session cookie
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_handler))
        .route("/callback", get(callback_handler))
        .route("/logout", post(logout_handler))
}
