//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Startup failures are `anyhow` errors; request errors are rendered by
//! the auth and catalog crates.

mod config;

use std::sync::Arc;

use anyhow::Context;
use auth::{PgUserRepository, auth_router, ensure_admin};
use axum::{
    Router, http,
    http::{Method, header},
};
use catalog::{PgCatalogRepository, catalog_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    if config.auth.uses_default_secret() {
        tracing::warn!("TOKEN_SECRET is the well-known default; tokens can be forged");
    }

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!("Migrations completed");

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let catalog = Arc::new(PgCatalogRepository::new(pool.clone()));

    if let Some(seed) = config.admin.clone() {
        let admin = ensure_admin(users.clone(), seed)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bootstrap administrator: {e}"))?;
        tracing::info!(user_id = %admin.user_id, "Administrator ready");
    }

    let app = build_app(users, catalog, &config);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Mount every route under `/api/v1` with tracing and CORS
fn build_app(
    users: Arc<PgUserRepository>,
    catalog: Arc<PgCatalogRepository>,
    config: &ApiConfig,
) -> Router {
    let api = Router::new()
        .merge(auth_router(users, config.auth.clone()))
        .merge(catalog_router(catalog));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
