//! Figure construction for the two dashboard charts.
//!
//! Both builders are pure functions of their inputs: calling one twice with
//! identical arguments produces identical figure documents.

pub mod colorscales;

use figure_protocol::{ColorScale, Figure, HeatmapTrace, Layout, ScatterTrace, Title};
use sst_store::{WarmingField, WindowSeries};

/// Build the warming-trend heatmap figure.
pub fn build_map_figure(
    field: &WarmingField,
    colorscale: ColorScale,
    zmin: f64,
    zmax: f64,
) -> Figure {
    let trace = HeatmapTrace::new(
        field.grid.lon.clone(),
        field.grid.lat.clone(),
        field.masked_rows(),
        colorscale,
        zmin,
        zmax,
    );

    let layout = Layout::new(Title::centered("Global Warming (°C/yr)"))
        .with_xaxis_title("Longitude")
        .with_yaxis_title("Latitude");

    Figure::new(trace.into(), layout)
}

/// Build the extracted-series figure.
///
/// The title reports the matched grid coordinate and the window size to one
/// decimal place. Missing slices render as gaps rather than failing.
pub fn build_series_figure(window: &WindowSeries, dlon: f64, dlat: f64) -> Figure {
    let values: Vec<Option<f64>> = window
        .values
        .iter()
        .map(|&v| if v.is_nan() { None } else { Some(v) })
        .collect();

    let trace = ScatterTrace::lines_and_markers(window.years.clone(), values);

    let title = format!(
        "SST at ({:.1}, {:.1}) avg over Δlon={:.1} and Δlat={:.1}",
        window.center_lon, window.center_lat, dlon, dlat
    );
    let layout = Layout::new(Title::centered(&title))
        .with_xaxis_title("Year")
        .with_yaxis_title("SST (°C)");

    Figure::new(trace.into(), layout)
}
