//! Synthetic bundle generation.
//!
//! Creates small bundles with known values for tests and for local bring-up
//! when the real preparation output is not at hand. The demo grid is coarse
//! (5° resolution) to keep the files tiny.

use std::path::Path;

use sst_common::Grid;

use crate::error::Result;
use crate::writer;

/// First year of the demo record.
pub const DEMO_START_YEAR: i32 = 1982;

/// Number of years in the demo record.
pub const DEMO_YEARS: usize = 41;

/// A coarse global grid at 5° resolution with cell-center coordinates.
pub fn demo_grid() -> Grid {
    let lon: Vec<f64> = (0..72).map(|i| -177.5 + 5.0 * i as f64).collect();
    let lat: Vec<f64> = (0..36).map(|j| -87.5 + 5.0 * j as f64).collect();
    Grid::new(lon, lat)
}

/// Synthetic annual SST: a latitudinal gradient plus a slow warming trend,
/// with polar cells left missing the way ice-covered ocean is in the real
/// product.
pub fn demo_sst_values(grid: &Grid, years: &[i32]) -> Vec<f64> {
    let mut values = Vec::with_capacity(years.len() * grid.len());
    for (t, _) in years.iter().enumerate() {
        for &lat in &grid.lat {
            for &lon in &grid.lon {
                if lat.abs() > 75.0 {
                    values.push(f64::NAN);
                } else {
                    let base = 28.0 * (lat.to_radians().cos().powi(2));
                    let trend = 0.02 * t as f64;
                    let ripple = 0.5 * (lon.to_radians() * 2.0).sin();
                    values.push(base + trend + ripple);
                }
            }
        }
    }
    values
}

/// Synthetic warming slopes with a band of exact zeros, which the loader
/// must reinterpret as missing.
pub fn demo_slope_values(grid: &Grid) -> Vec<f64> {
    let mut values = Vec::with_capacity(grid.len());
    for &lat in &grid.lat {
        for &lon in &grid.lon {
            if lat.abs() > 75.0 {
                values.push(0.0);
            } else {
                values.push(0.01 + 0.02 * (lat.to_radians().cos()) + 0.002 * (lon / 180.0));
            }
        }
    }
    values
}

/// Year labels for the demo record.
pub fn demo_years() -> Vec<i32> {
    (0..DEMO_YEARS as i32).map(|i| DEMO_START_YEAR + i).collect()
}

/// Write both demo bundles under `data_dir` using the standard bundle names.
pub fn write_demo_bundles(data_dir: &Path) -> Result<()> {
    let grid = demo_grid();
    let years = demo_years();

    let sst_values = demo_sst_values(&grid, &years);
    writer::write_sst_bundle(
        &data_dir.join(crate::config::DEFAULT_SST_BUNDLE),
        &grid,
        &years,
        &sst_values,
    )?;

    let slopes = demo_slope_values(&grid);
    writer::write_warming_bundle(
        &data_dir.join(crate::config::DEFAULT_WARMING_BUNDLE),
        &grid,
        &slopes,
    )?;

    tracing::info!(dir = %data_dir.display(), "Wrote demo data bundles");
    Ok(())
}
