//! Trace types for the figure protocol.

use serde::{Deserialize, Serialize};

/// A color scale as explicit stops: `(position, css color)` with positions
/// in `[0, 1]`. Serializes to the nested-array form Plotly expects.
pub type ColorScale = Vec<(f64, String)>;

/// A single drawable trace.
///
/// The `type` tag selects the Plotly trace kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Heatmap(HeatmapTrace),
    Scatter(ScatterTrace),
}

impl From<HeatmapTrace> for Trace {
    fn from(t: HeatmapTrace) -> Self {
        Trace::Heatmap(t)
    }
}

impl From<ScatterTrace> for Trace {
    fn from(t: ScatterTrace) -> Self {
        Trace::Scatter(t)
    }
}

/// A heatmap over a rectilinear grid.
///
/// `z` is row-major with one inner vector per `y` coordinate; `None` cells
/// serialize as `null` and render as gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatmapTrace {
    /// Column coordinates (longitude).
    pub x: Vec<f64>,
    /// Row coordinates (latitude).
    pub y: Vec<f64>,
    /// Cell values, one row per `y` entry.
    pub z: Vec<Vec<Option<f64>>>,
    /// Explicit color scale stops.
    pub colorscale: ColorScale,
    /// Lower color-scale bound. Passed through in the order the user gave it.
    pub zmin: f64,
    /// Upper color-scale bound.
    pub zmax: f64,
}

impl HeatmapTrace {
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<Vec<Option<f64>>>,
        colorscale: ColorScale,
        zmin: f64,
        zmax: f64,
    ) -> Self {
        Self {
            x,
            y,
            z,
            colorscale,
            zmin,
            zmax,
        }
    }
}

/// A scatter/line trace along an integer axis (years).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterTrace {
    pub x: Vec<i32>,
    pub y: Vec<Option<f64>>,
    pub mode: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

impl ScatterTrace {
    /// A lines-plus-markers trace in the house style (black line, size-20
    /// markers, matching the reference dashboard).
    pub fn lines_and_markers(x: Vec<i32>, y: Vec<Option<f64>>) -> Self {
        Self {
            x,
            y,
            mode: "lines+markers".to_string(),
            line: Some(LineStyle {
                color: "black".to_string(),
            }),
            marker: Some(MarkerStyle { size: 20 }),
        }
    }
}

/// Line styling for a scatter trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineStyle {
    pub color: String,
}

/// Marker styling for a scatter trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerStyle {
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_type_tag() {
        let trace: Trace = HeatmapTrace::new(
            vec![0.0, 1.0],
            vec![0.0],
            vec![vec![Some(1.0), None]],
            vec![(0.0, "rgb(0,0,255)".to_string()), (1.0, "rgb(255,0,0)".to_string())],
            -0.05,
            0.05,
        )
        .into();

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"type\":\"heatmap\""));
        assert!(json.contains("\"zmin\":-0.05"));
    }

    #[test]
    fn test_missing_cells_serialize_as_null() {
        let trace = HeatmapTrace::new(
            vec![0.0],
            vec![0.0],
            vec![vec![None]],
            vec![(0.0, "rgb(0,0,0)".to_string()), (1.0, "rgb(255,255,255)".to_string())],
            0.0,
            1.0,
        );
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"z\":[[null]]"));
    }

    #[test]
    fn test_colorscale_nested_array_form() {
        let scale: ColorScale = vec![
            (0.0, "rgb(5,10,172)".to_string()),
            (1.0, "rgb(178,10,28)".to_string()),
        ];
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(json, r#"[[0.0,"rgb(5,10,172)"],[1.0,"rgb(178,10,28)"]]"#);
    }

    #[test]
    fn test_scatter_house_style() {
        let trace = ScatterTrace::lines_and_markers(vec![1982, 1983], vec![Some(18.0), Some(18.1)]);
        let json = serde_json::to_string(&Trace::from(trace)).unwrap();
        assert!(json.contains("\"type\":\"scatter\""));
        assert!(json.contains("\"mode\":\"lines+markers\""));
        assert!(json.contains("\"line\":{\"color\":\"black\"}"));
        assert!(json.contains("\"marker\":{\"size\":20}"));
    }

    #[test]
    fn test_scatter_round_trip_with_gaps() {
        let trace = ScatterTrace::lines_and_markers(vec![1982, 1983, 1984], vec![Some(18.0), None, Some(18.2)]);
        let json = serde_json::to_string(&trace).unwrap();
        let restored: ScatterTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, restored);
    }
}
