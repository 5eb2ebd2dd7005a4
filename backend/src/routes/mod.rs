//! Route definitions for the fridge API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Fridge routes
        .nest("/fridge", fridge_routes())
}

/// Fridge routes
fn fridge_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_fridge))
        .route("/normalize", post(handlers::normalize_inventory))
        .route("/summary", post(handlers::summarize_inventory))
        .route("/categories", get(handlers::get_category_labels))
}
