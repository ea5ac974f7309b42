//! User-facing defaults for the dashboard controls.
//!
//! These mirror the initial values of the page inputs, so an `/api/map` or
//! `/api/timeseries` request with omitted parameters behaves exactly like
//! the freshly loaded page.

/// Default colormap name.
pub const DEFAULT_COLORMAP: &str = "RdBu_r";

/// Default lower color-scale bound (°C/yr).
pub const DEFAULT_ZMIN: f64 = -0.05;

/// Default upper color-scale bound (°C/yr).
pub const DEFAULT_ZMAX: f64 = 0.05;

/// Default window size in grid cells, both axes.
pub const DEFAULT_WINDOW: f64 = 5.0;
