//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{
    AuthService, BusinessService, ContactService, DestinationService, PostService,
};
use crate::config::Config;
use crate::domain::identity::IdentityProvider;
use crate::domain::repositories::{
    BusinessRepository, ContactRepository, PlaceRepository, PostRepository,
};
use crate::infrastructure::identity::SupabaseIdentity;
use crate::infrastructure::persistence::{
    PgBusinessRepository, PgContactRepository, PgPlaceRepository, PgPostRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::image_url::ImageUrls;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Wires repositories, the identity client and services into [`AppState`].
///
/// # Errors
///
/// Returns an error if the country catalog, id mode or identity provider
/// URL is invalid.
pub fn build_state(pool: PgPool, config: &Config) -> Result<AppState> {
    let pool = Arc::new(pool);

    let place_repository: Arc<dyn PlaceRepository> =
        Arc::new(PgPlaceRepository::new(pool.clone()));
    let business_repository: Arc<dyn BusinessRepository> =
        Arc::new(PgBusinessRepository::new(pool.clone()));
    let post_repository: Arc<dyn PostRepository> = Arc::new(PgPostRepository::new(pool.clone()));
    let contact_repository: Arc<dyn ContactRepository> =
        Arc::new(PgContactRepository::new(pool));

    let identity: Arc<dyn IdentityProvider> = Arc::new(
        SupabaseIdentity::new(&config.supabase_url, config.supabase_anon_key.clone())
            .context("Failed to create identity provider client")?,
    );

    Ok(AppState {
        destination_service: Arc::new(DestinationService::new(
            place_repository,
            config.country_catalog()?,
            config.id_mode()?,
        )),
        business_service: Arc::new(BusinessService::new(business_repository)),
        post_service: Arc::new(PostService::new(post_repository)),
        contact_service: Arc::new(ContactService::new(contact_repository)),
        auth_service: Arc::new(AuthService::new(identity, &config.site_url)),
        images: ImageUrls::new(config.cloudinary_cloud_name.clone()),
        secure_cookies: config.secure_cookies(),
    })
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Services and identity provider client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = build_state(pool, &config)?;
    tracing::info!(
        countries = state.destination_service.countries().len(),
        "Services initialized"
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
