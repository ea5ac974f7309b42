//! Common types shared across the SST dashboard crates.

pub mod bbox;
pub mod error;
pub mod grid;

pub use bbox::BoundingBox;
pub use error::{DashboardError, DashboardResult};
pub use grid::Grid;
