//! Figure and layout types.

use serde::{Deserialize, Serialize};

use crate::traces::Trace;

/// A complete figure document: traces plus layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    /// The traces to draw.
    pub data: Vec<Trace>,

    /// Layout configuration (title, axes).
    pub layout: Layout,
}

impl Figure {
    /// Create a figure with a single trace.
    pub fn new(trace: Trace, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }

    /// Create a figure with no traces, showing only a layout title.
    ///
    /// Used as a placeholder before any data is available.
    pub fn empty(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }
}

/// Figure layout: title and axis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    /// Create a layout with just a title.
    pub fn new(title: Title) -> Self {
        Self {
            title: Some(title),
            xaxis: None,
            yaxis: None,
        }
    }

    /// Set the x-axis title.
    pub fn with_xaxis_title(mut self, text: &str) -> Self {
        self.xaxis = Some(Axis::titled(text));
        self
    }

    /// Set the y-axis title.
    pub fn with_yaxis_title(mut self, text: &str) -> Self {
        self.yaxis = Some(Axis::titled(text));
        self
    }
}

/// A figure title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    /// Horizontal position in paper coordinates (0 = left, 1 = right).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
}

impl Title {
    /// A centered title in the house style (20pt, anchored at the middle).
    pub fn centered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: Some(Font { size: 20 }),
            x: Some(0.5),
            xanchor: Some("center".to_string()),
        }
    }

    /// A plain title with default placement.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: None,
            x: None,
            xanchor: None,
        }
    }
}

/// Font settings for a title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Font {
    pub size: u32,
}

/// Axis configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
}

impl Axis {
    /// An axis carrying only a title.
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(AxisTitle {
                text: text.to_string(),
            }),
        }
    }
}

/// An axis title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisTitle {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traces::ScatterTrace;

    #[test]
    fn test_centered_title_serialization() {
        let title = Title::centered("Global Warming (°C/yr)");
        let json = serde_json::to_string(&title).unwrap();
        assert!(json.contains("\"x\":0.5"));
        assert!(json.contains("\"xanchor\":\"center\""));
        assert!(json.contains("\"size\":20"));
    }

    #[test]
    fn test_plain_title_omits_placement() {
        let json = serde_json::to_string(&Title::plain("placeholder")).unwrap();
        assert!(!json.contains("xanchor"));
        assert!(!json.contains("font"));
    }

    #[test]
    fn test_empty_figure_has_no_traces() {
        let figure = Figure::empty(Layout::new(Title::plain("Click a grid point")));
        let json = serde_json::to_string(&figure).unwrap();
        assert!(json.contains("\"data\":[]"));
        assert!(json.contains("Click a grid point"));
    }

    #[test]
    fn test_layout_axis_titles() {
        let layout = Layout::new(Title::plain("t"))
            .with_xaxis_title("Year")
            .with_yaxis_title("SST (°C)");
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("\"xaxis\":{\"title\":{\"text\":\"Year\"}}"));
        assert!(json.contains("SST (°C)"));
    }

    #[test]
    fn test_figure_round_trip() {
        let trace = ScatterTrace::lines_and_markers(vec![1982, 1983], vec![Some(18.5), None]);
        let figure = Figure::new(trace.into(), Layout::new(Title::centered("series")));
        let json = serde_json::to_string(&figure).unwrap();
        let restored: Figure = serde_json::from_str(&json).unwrap();
        assert_eq!(figure, restored);
    }
}
