//! HTTP surface for the electricity price index.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// API routes, with the chart's static files served for every other path.
pub fn router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/api/cpi", get(routes::cpi::get_cpi))
        .route("/api/cpi/latest", get(routes::cpi::get_latest))
        .route("/api/sales", get(routes::sales::list_sales))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
