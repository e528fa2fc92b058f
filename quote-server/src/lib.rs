pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use crate::handlers::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the service router. Unmatched paths fall through to a plain 404
/// without touching the quote pipeline.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cotacao", get(handlers::get_quote))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
