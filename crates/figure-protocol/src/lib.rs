//! Plotly figure wire protocol.
//!
//! This crate provides the serde types for the figure JSON consumed by the
//! dashboard page. The browser hands each document directly to
//! `Plotly.newPlot`, so field names and nesting follow the Plotly schema:
//! a figure is a list of traces plus a layout.
//!
//! Missing values are modelled as `Option<f64>` and serialize as `null`,
//! which Plotly renders as gaps.
//!
//! # Example
//!
//! ```rust
//! use figure_protocol::{Figure, Layout, ScatterTrace, Title};
//!
//! let trace = ScatterTrace::lines_and_markers(vec![1982, 1983], vec![Some(18.2), None]);
//! let figure = Figure::new(trace.into(), Layout::new(Title::centered("SST at (1.0, 4.0)")));
//! ```

pub mod figure;
pub mod responses;
pub mod traces;

pub use figure::{Axis, AxisTitle, Figure, Font, Layout, Title};
pub use responses::ExceptionBody;
pub use traces::{ColorScale, HeatmapTrace, LineStyle, MarkerStyle, ScatterTrace, Trace};
