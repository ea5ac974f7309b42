//! Grid specifications for gridded climate data.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A rectilinear lat/lon grid defined by explicit coordinate vectors.
///
/// Unlike a regular-spacing grid, the coordinate vectors are stored verbatim
/// as produced by the data-preparation step, so irregular spacing is allowed.
/// Each vector must be strictly monotonic (ascending or descending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Longitude coordinates, one per column.
    pub lon: Vec<f64>,
    /// Latitude coordinates, one per row.
    pub lat: Vec<f64>,
}

impl Grid {
    /// Create a new grid from coordinate vectors.
    pub fn new(lon: Vec<f64>, lat: Vec<f64>) -> Self {
        Self { lon, lat }
    }

    /// Number of columns (longitude points).
    pub fn nlon(&self) -> usize {
        self.lon.len()
    }

    /// Number of rows (latitude points).
    pub fn nlat(&self) -> usize {
        self.lat.len()
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.nlon() * self.nlat()
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.lon.is_empty() || self.lat.is_empty()
    }

    /// Validate that both coordinate vectors are non-empty and strictly monotonic.
    ///
    /// A degenerate grid is a configuration error raised at load time, before
    /// any request is served.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.lon.is_empty() {
            return Err(DashboardError::DegenerateGrid(
                "longitude axis has no points".to_string(),
            ));
        }
        if self.lat.is_empty() {
            return Err(DashboardError::DegenerateGrid(
                "latitude axis has no points".to_string(),
            ));
        }
        if !is_strictly_monotonic(&self.lon) {
            return Err(DashboardError::DegenerateGrid(
                "longitude axis is not strictly monotonic".to_string(),
            ));
        }
        if !is_strictly_monotonic(&self.lat) {
            return Err(DashboardError::DegenerateGrid(
                "latitude axis is not strictly monotonic".to_string(),
            ));
        }
        Ok(())
    }

    /// Calculate the bounding box of this grid.
    pub fn bbox(&self) -> BoundingBox {
        let (min_lon, max_lon) = min_max(&self.lon);
        let (min_lat, max_lat) = min_max(&self.lat);
        BoundingBox::new(min_lon, min_lat, max_lon, max_lat)
    }

    /// Index of the longitude coordinate nearest to `lon`.
    ///
    /// Coordinates outside the grid clamp to the boundary point. Ties resolve
    /// to the first index achieving the minimum distance.
    pub fn nearest_lon(&self, lon: f64) -> usize {
        nearest_index(&self.lon, lon)
    }

    /// Index of the latitude coordinate nearest to `lat`.
    pub fn nearest_lat(&self, lat: f64) -> usize {
        nearest_index(&self.lat, lat)
    }
}

/// Find the index of the coordinate nearest to `target`.
///
/// First index achieving the minimum distance wins, which keeps the lookup
/// deterministic when `target` falls exactly between two grid points.
fn nearest_index(coords: &[f64], target: f64) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, &c) in coords.iter().enumerate() {
        let dist = (c - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx
}

fn is_strictly_monotonic(coords: &[f64]) -> bool {
    if coords.len() < 2 {
        return true;
    }
    let ascending = coords.windows(2).all(|w| w[0] < w[1]);
    let descending = coords.windows(2).all(|w| w[0] > w[1]);
    ascending || descending
}

fn min_max(coords: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &c in coords {
        min = min.min(c);
        max = max.max(c);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_degree_grid() -> Grid {
        let lon: Vec<f64> = (0..360).map(|i| -179.5 + i as f64).collect();
        let lat: Vec<f64> = (0..180).map(|j| -89.5 + j as f64).collect();
        Grid::new(lon, lat)
    }

    #[test]
    fn test_nearest_exact_match() {
        let grid = one_degree_grid();
        assert_eq!(grid.nearest_lon(-179.5), 0);
        assert_eq!(grid.nearest_lon(0.5), 180);
        assert_eq!(grid.nearest_lat(-89.5), 0);
    }

    #[test]
    fn test_nearest_tie_breaks_to_first_index() {
        // 0.0 is equidistant from -0.5 and 0.5
        let grid = one_degree_grid();
        assert_eq!(grid.nearest_lon(0.0), 179);
        assert_eq!(grid.nearest_lat(0.0), 89);
    }

    #[test]
    fn test_nearest_clamps_outside_bbox() {
        let grid = one_degree_grid();
        assert_eq!(grid.nearest_lon(-500.0), 0);
        assert_eq!(grid.nearest_lon(500.0), 359);
        assert_eq!(grid.nearest_lat(-91.0), 0);
        assert_eq!(grid.nearest_lat(95.0), 179);
    }

    #[test]
    fn test_nearest_descending_axis() {
        // Some products store latitude north-to-south
        let grid = Grid::new(vec![0.0, 1.0], vec![90.0, 45.0, 0.0, -45.0, -90.0]);
        grid.validate().unwrap();
        assert_eq!(grid.nearest_lat(50.0), 1);
        assert_eq!(grid.nearest_lat(-100.0), 4);
    }

    #[test]
    fn test_validate_rejects_empty_axis() {
        let grid = Grid::new(vec![], vec![0.0]);
        assert!(grid.validate().is_err());
        let grid = Grid::new(vec![0.0], vec![]);
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_monotonic_axis() {
        let grid = Grid::new(vec![0.0, 2.0, 1.0], vec![0.0, 1.0]);
        assert!(grid.validate().is_err());
        // Duplicate coordinates are not strictly monotonic either
        let grid = Grid::new(vec![0.0, 1.0], vec![0.0, 0.0, 1.0]);
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_bbox_descending_latitude() {
        let grid = Grid::new(vec![-10.0, 0.0, 10.0], vec![5.0, -5.0]);
        let bbox = grid.bbox();
        assert_eq!(bbox.min_lon, -10.0);
        assert_eq!(bbox.max_lon, 10.0);
        assert_eq!(bbox.min_lat, -5.0);
        assert_eq!(bbox.max_lat, 5.0);
    }
}
