//! Fridge Valuation - Backend Server
//!
//! Normalizes raw fridge inventory payloads, values them and groups
//! them by freshness for the dashboard.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::InventoryApiClient;
use services::FridgeService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub inventory_api: InventoryApiClient,
    pub fridge: FridgeService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fridge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Fridge Valuation Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        danger_days = config.fridge.danger_days,
        warning_days = config.fridge.warning_days,
        expiring_soon_days = config.fridge.expiring_soon_days,
        currency = %config.fridge.currency,
        "Fridge settings loaded"
    );

    let inventory_api = InventoryApiClient::new(&config.upstream)?;
    tracing::info!("Upstream inventory service: {}", inventory_api.inventory_url());

    // Create application state
    let state = AppState {
        inventory_api,
        fridge: FridgeService::new(&config.fridge),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Fridge Valuation API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
