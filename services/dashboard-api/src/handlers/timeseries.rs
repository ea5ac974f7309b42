//! Extracted time-series figure handler.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use figure_protocol::ExceptionBody;

use crate::config::DEFAULT_WINDOW;
use crate::handlers::common::{error_response, json_response, parse_f64, require_f64};
use crate::rendering;
use crate::state::AppState;

/// Query parameters for the time-series endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TimeSeriesQueryParams {
    /// Clicked longitude. Required.
    pub lon: Option<String>,

    /// Clicked latitude. Required.
    pub lat: Option<String>,

    /// Window size in grid cells along the longitude axis.
    pub dlon: Option<String>,

    /// Window size in grid cells along the latitude axis.
    pub dlat: Option<String>,
}

/// GET /api/timeseries
pub async fn timeseries_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TimeSeriesQueryParams>,
) -> Response {
    let lon = match require_f64("lon", params.lon.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let lat = match require_f64("lat", params.lat.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let dlon = match window_param("dlon", params.dlon.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let dlat = match window_param("dlat", params.dlat.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let window = state.store.extract_window(lon, lat, dlon, dlat);

    tracing::debug!(
        lon,
        lat,
        center_lon = window.center_lon,
        center_lat = window.center_lat,
        "Extracted window series"
    );

    let figure = rendering::build_series_figure(&window, dlon, dlat);
    json_response(&figure)
}

/// Parse a window-size parameter: defaulting, numeric, non-negative.
fn window_param(param: &str, raw: Option<&str>) -> Result<f64, Response> {
    let value = parse_f64(param, raw, DEFAULT_WINDOW)?;
    if !value.is_finite() || value < 0.0 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            ExceptionBody::bad_request(format!(
                "Parameter '{}' must be a non-negative number, got {}",
                param, value
            )),
        ));
    }
    Ok(value)
}
