//! Dashboard API library.
//!
//! The service serves a single-page dashboard plus the figure endpoints it
//! fetches: the warming-trend map and the click-driven SST time series.

pub mod config;
pub mod handlers;
pub mod rendering;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index_handler))
        .route("/api/map", get(handlers::map::map_handler))
        .route(
            "/api/timeseries",
            get(handlers::timeseries::timeseries_handler),
        )
        .route("/health", get(handlers::health::health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
