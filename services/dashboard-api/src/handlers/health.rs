//! Health check handler.

use axum::{extract::Extension, response::Response};
use serde_json::json;
use std::sync::Arc;

use crate::handlers::common::json_response;
use crate::state::AppState;

/// GET /health
pub async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let body = json!({
        "status": "ok",
        "service": "dashboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "years": state.store.sst.years.len(),
        "grid": {
            "nlon": state.store.sst.grid.nlon(),
            "nlat": state.store.sst.grid.nlat(),
        },
    });
    json_response(&body)
}
