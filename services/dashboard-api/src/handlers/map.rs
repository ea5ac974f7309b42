//! Warming-map figure handler.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use figure_protocol::ExceptionBody;

use crate::config::{DEFAULT_COLORMAP, DEFAULT_ZMAX, DEFAULT_ZMIN};
use crate::handlers::common::{error_response, json_response, parse_f64};
use crate::rendering::{self, colorscales};
use crate::state::AppState;

/// Query parameters for the map endpoint.
///
/// Numeric parameters arrive as strings so that a non-numeric value becomes
/// a user-facing error body instead of a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MapQueryParams {
    /// Colormap name, e.g. "RdBu_r".
    pub colormap: Option<String>,

    /// Lower color-scale bound.
    pub zmin: Option<String>,

    /// Upper color-scale bound.
    pub zmax: Option<String>,
}

/// GET /api/map
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MapQueryParams>,
) -> Response {
    let zmin = match parse_f64("zmin", params.zmin.as_deref(), DEFAULT_ZMIN) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let zmax = match parse_f64("zmax", params.zmax.as_deref(), DEFAULT_ZMAX) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let colormap = params.colormap.as_deref().unwrap_or(DEFAULT_COLORMAP);
    let colorscale = match colorscales::resolve(colormap) {
        Ok(scale) => scale,
        Err(e) => {
            tracing::debug!(colormap, "Colormap lookup failed");
            return error_response(StatusCode::BAD_REQUEST, ExceptionBody::bad_request(e.to_string()));
        }
    };

    let figure = rendering::build_map_figure(&state.store.warming, colorscale, zmin, zmax);
    json_response(&figure)
}
