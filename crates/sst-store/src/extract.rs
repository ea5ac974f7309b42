//! Spatial-window time-series extraction.
//!
//! Given a clicked coordinate and a window size in grid cells, locate the
//! nearest grid cell and average the SST cube over the surrounding window
//! for every time slice, skipping missing values.

use crate::store::{DataStore, SstSeries};

/// A spatially-averaged time series around a matched grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSeries {
    /// Longitude of the matched grid cell (not the raw click).
    pub center_lon: f64,
    /// Latitude of the matched grid cell.
    pub center_lat: f64,
    /// Year labels, one per value.
    pub years: Vec<i32>,
    /// Averaged values; NaN where the whole window was missing.
    pub values: Vec<f64>,
}

impl SstSeries {
    /// Extract the mean SST series for a window around the clicked point.
    ///
    /// `dlon`/`dlat` are user-facing window sizes in grid cells; the window
    /// half-extent is `floor(d / 2)` cells on each side of the matched cell,
    /// so `d = 0` selects exactly the nearest cell. Clicks outside the grid
    /// clamp to the nearest boundary cell.
    pub fn window_mean(&self, lon: f64, lat: f64, dlon: f64, dlat: f64) -> WindowSeries {
        let lon_idx = self.grid.nearest_lon(lon);
        let lat_idx = self.grid.nearest_lat(lat);

        let (lon_lo, lon_hi) = window_bounds(lon_idx, half_extent(dlon), self.grid.nlon());
        let (lat_lo, lat_hi) = window_bounds(lat_idx, half_extent(dlat), self.grid.nlat());

        let mut values = Vec::with_capacity(self.len_time());
        for t in 0..self.len_time() {
            let mut sum = 0.0;
            let mut count = 0usize;
            for row in lat_lo..lat_hi {
                for col in lon_lo..lon_hi {
                    let v = self.value(t, row, col);
                    if !v.is_nan() {
                        sum += v;
                        count += 1;
                    }
                }
            }
            values.push(if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            });
        }

        WindowSeries {
            center_lon: self.grid.lon[lon_idx],
            center_lat: self.grid.lat[lat_idx],
            years: self.years.clone(),
            values,
        }
    }
}

impl DataStore {
    /// Extract a window-averaged SST series around a clicked coordinate.
    pub fn extract_window(&self, lon: f64, lat: f64, dlon: f64, dlat: f64) -> WindowSeries {
        self.sst.window_mean(lon, lat, dlon, dlat)
    }
}

/// Half-extent in cells for a user-provided window size.
fn half_extent(d: f64) -> usize {
    if d.is_finite() && d > 0.0 {
        (d / 2.0).floor() as usize
    } else {
        0
    }
}

/// Window bounds on one axis, clamped to `[0, n)` and always containing the
/// center cell.
fn window_bounds(idx: usize, half: usize, n: usize) -> (usize, usize) {
    (idx.saturating_sub(half), n.min(idx + 1 + half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sst_common::Grid;

    fn series_from_slices(grid: Grid, years: Vec<i32>, slices: &[&[f64]]) -> SstSeries {
        let values: Vec<f64> = slices.iter().flat_map(|s| s.iter().copied()).collect();
        SstSeries::new(grid, years, values).unwrap()
    }

    /// The hand-checkable grid from the acceptance scenario:
    /// lon = [-10, 0, 10], lat = [-5, 5], two years.
    fn scenario_series() -> SstSeries {
        let grid = Grid::new(vec![-10.0, 0.0, 10.0], vec![-5.0, 5.0]);
        series_from_slices(
            grid,
            vec![1982, 1983],
            &[
                &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            ],
        )
    }

    #[test]
    fn test_zero_window_selects_single_cell() {
        let series = scenario_series();
        let out = series.window_mean(1.0, 4.0, 0.0, 0.0);
        assert_eq!(out.center_lon, 0.0);
        assert_eq!(out.center_lat, 5.0);
        assert_eq!(out.years, vec![1982, 1983]);
        // (lat_idx=1, lon_idx=1) -> row 1, col 1
        assert_eq!(out.values, vec![5.0, 50.0]);
    }

    #[test]
    fn test_click_outside_bbox_clamps_to_boundary() {
        let series = scenario_series();
        let out = series.window_mean(-400.0, 99.0, 0.0, 0.0);
        assert_eq!(out.center_lon, -10.0);
        assert_eq!(out.center_lat, 5.0);
        assert_eq!(out.values, vec![4.0, 40.0]);
    }

    #[test]
    fn test_window_mean_skips_missing_cells() {
        let grid = Grid::new(vec![0.0, 1.0], vec![0.0, 1.0]);
        // 2x2 window with one missing cell: mean over the three present ones
        let series = series_from_slices(
            grid,
            vec![2000],
            &[&[1.0, 2.0, f64::NAN, 4.0]],
        );
        let out = series.window_mean(0.5, 0.5, 2.0, 2.0);
        assert_eq!(out.values, vec![(1.0 + 2.0 + 4.0) / 3.0]);
    }

    #[test]
    fn test_all_missing_window_yields_nan() {
        let grid = Grid::new(vec![0.0, 1.0], vec![0.0]);
        let series = series_from_slices(
            grid,
            vec![2000, 2001],
            &[&[f64::NAN, f64::NAN], &[7.0, 9.0]],
        );
        let out = series.window_mean(0.0, 0.0, 2.0, 0.0);
        assert!(out.values[0].is_nan());
        assert_eq!(out.values[1], 8.0);
    }

    #[test]
    fn test_window_clamped_at_grid_edge() {
        let grid = Grid::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0]);
        let series = series_from_slices(grid, vec![2000], &[&[1.0, 2.0, 3.0, 4.0]]);
        // Click at the left edge with a window that would extend past it
        let out = series.window_mean(0.0, 0.0, 4.0, 0.0);
        // half-extent 2 -> cols [0, 3)
        assert_eq!(out.values, vec![2.0]);
    }

    #[test]
    fn test_half_extent_policy() {
        assert_eq!(half_extent(0.0), 0);
        assert_eq!(half_extent(1.0), 0);
        assert_eq!(half_extent(2.0), 1);
        assert_eq!(half_extent(5.0), 2);
        assert_eq!(half_extent(-3.0), 0);
        assert_eq!(half_extent(f64::NAN), 0);
    }

    #[test]
    fn test_window_bounds_stay_in_range() {
        for n in 1..6usize {
            for idx in 0..n {
                for half in 0..4usize {
                    let (lo, hi) = window_bounds(idx, half, n);
                    assert!(lo < hi, "lo {} >= hi {}", lo, hi);
                    assert!(hi <= n);
                    assert!(lo <= idx && idx < hi, "center cell not in window");
                }
            }
        }
    }
}
