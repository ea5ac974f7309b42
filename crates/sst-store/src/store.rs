//! In-memory datasets loaded from the Zarr bundles.

use std::sync::Arc;

use sst_common::Grid;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::reader;

/// The per-cell linear warming trend (°C/yr), aligned to its own grid.
///
/// Values are `[nlat, nlon]` row-major. NaN marks cells where no trend was
/// computed. The preparation step writes an exact zero for such cells, so
/// zeros are reinterpreted as NaN at load time — an approximation inherited
/// from the upstream data, not a precision guarantee.
#[derive(Debug, Clone)]
pub struct WarmingField {
    pub grid: Grid,
    values: Vec<f64>,
}

impl WarmingField {
    /// Build a field, checking the value count against the grid.
    pub fn new(grid: Grid, values: Vec<f64>) -> Result<Self> {
        if values.len() != grid.len() {
            return Err(StoreError::shape_mismatch(format!(
                "slopes has {} values, expected {}x{}",
                values.len(),
                grid.nlat(),
                grid.nlon()
            )));
        }
        Ok(Self { grid, values })
    }

    /// Value at (row, col). Out-of-range indices return NaN.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        if row >= self.grid.nlat() || col >= self.grid.nlon() {
            return f64::NAN;
        }
        self.values[row * self.grid.nlon() + col]
    }

    /// The field as nested rows with NaN masked to `None`, the shape the
    /// figure protocol wants.
    pub fn masked_rows(&self) -> Vec<Vec<Option<f64>>> {
        let nlon = self.grid.nlon();
        self.values
            .chunks(nlon)
            .map(|row| {
                row.iter()
                    .map(|&v| if v.is_nan() { None } else { Some(v) })
                    .collect()
            })
            .collect()
    }
}

/// The annual SST cube: `[T, nlat, nlon]` row-major plus one year label per
/// time slice.
#[derive(Debug, Clone)]
pub struct SstSeries {
    pub grid: Grid,
    pub years: Vec<i32>,
    values: Vec<f64>,
}

impl SstSeries {
    /// Build a cube, checking the value count against grid and years.
    pub fn new(grid: Grid, years: Vec<i32>, values: Vec<f64>) -> Result<Self> {
        let expected = years.len() * grid.len();
        if values.len() != expected {
            return Err(StoreError::shape_mismatch(format!(
                "sst_yearly has {} values, expected {}x{}x{}",
                values.len(),
                years.len(),
                grid.nlat(),
                grid.nlon()
            )));
        }
        Ok(Self {
            grid,
            years,
            values,
        })
    }

    /// Number of time slices.
    pub fn len_time(&self) -> usize {
        self.years.len()
    }

    /// Value at (time, row, col). Out-of-range indices return NaN.
    pub fn value(&self, t: usize, row: usize, col: usize) -> f64 {
        let (nlat, nlon) = (self.grid.nlat(), self.grid.nlon());
        if t >= self.len_time() || row >= nlat || col >= nlon {
            return f64::NAN;
        }
        self.values[(t * nlat + row) * nlon + col]
    }
}

/// The immutable in-memory data store shared across request handlers.
#[derive(Debug, Clone)]
pub struct DataStore {
    pub warming: WarmingField,
    pub sst: SstSeries,
}

impl DataStore {
    /// Load both bundles from disk.
    ///
    /// Any failure here is fatal: the caller logs it and exits before
    /// serving.
    pub fn load(config: &StoreConfig) -> Result<Arc<Self>> {
        let warming = load_warming(config)?;
        let sst = load_sst(config)?;

        tracing::info!(
            warming_shape = ?(warming.grid.nlat(), warming.grid.nlon()),
            sst_shape = ?(sst.len_time(), sst.grid.nlat(), sst.grid.nlon()),
            years = ?(sst.years.first(), sst.years.last()),
            "Loaded data bundles"
        );

        Ok(Arc::new(Self { warming, sst }))
    }
}

fn load_grid(store: &Arc<zarrs_filesystem::FilesystemStore>) -> Result<Grid> {
    let lon = reader::read_coord(store, "lon")?;
    let lat = reader::read_coord(store, "lat")?;
    let grid = Grid::new(lon, lat);
    grid.validate()
        .map_err(|e| StoreError::InvalidGrid(e.to_string()))?;
    Ok(grid)
}

fn load_warming(config: &StoreConfig) -> Result<WarmingField> {
    let path = config.warming_path();
    let store = reader::open_bundle(&path)?;
    let grid = load_grid(&store)?;

    let slopes_array = reader::open_array(&store, "slopes")?;
    let shape = slopes_array.shape().to_vec();
    if shape != [grid.nlat() as u64, grid.nlon() as u64] {
        return Err(StoreError::shape_mismatch(format!(
            "slopes shape {:?} does not match grid {}x{}",
            shape,
            grid.nlat(),
            grid.nlon()
        )));
    }

    // Zero trend is indistinguishable from "not computed" in the
    // preparation step.
    let slopes: Vec<f64> = reader::read_f64(&slopes_array)?
        .into_iter()
        .map(|v| if v == 0.0 { f64::NAN } else { v })
        .collect();

    WarmingField::new(grid, slopes)
}

fn load_sst(config: &StoreConfig) -> Result<SstSeries> {
    let path = config.sst_path();
    let store = reader::open_bundle(&path)?;
    let grid = load_grid(&store)?;

    let years_array = reader::open_array(&store, "years")?;
    let years: Vec<i32> = reader::read_i64(&years_array)?
        .into_iter()
        .map(|y| y as i32)
        .collect();
    if years.is_empty() {
        return Err(StoreError::shape_mismatch(
            "years axis has no entries".to_string(),
        ));
    }

    let sst_array = reader::open_array(&store, "sst_yearly")?;
    let shape = sst_array.shape().to_vec();
    if shape != [years.len() as u64, grid.nlat() as u64, grid.nlon() as u64] {
        return Err(StoreError::shape_mismatch(format!(
            "sst_yearly shape {:?} does not match {}x{}x{}",
            shape,
            years.len(),
            grid.nlat(),
            grid.nlon()
        )));
    }

    let values = reader::read_f64(&sst_array)?;
    SstSeries::new(grid, years, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warming_field_rejects_shape_mismatch() {
        let grid = Grid::new(vec![0.0, 1.0], vec![0.0, 1.0]);
        assert!(WarmingField::new(grid, vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_masked_rows_converts_nan_to_none() {
        let grid = Grid::new(vec![0.0, 1.0], vec![0.0]);
        let field = WarmingField::new(grid, vec![0.01, f64::NAN]).unwrap();
        assert_eq!(field.masked_rows(), vec![vec![Some(0.01), None]]);
    }

    #[test]
    fn test_sst_series_indexing() {
        let grid = Grid::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]);
        // [2, 2, 3] cube: value = t*100 + row*10 + col
        let mut values = Vec::new();
        for t in 0..2 {
            for row in 0..2 {
                for col in 0..3 {
                    values.push((t * 100 + row * 10 + col) as f64);
                }
            }
        }
        let series = SstSeries::new(grid, vec![1982, 1983], values).unwrap();
        assert_eq!(series.value(0, 0, 0), 0.0);
        assert_eq!(series.value(1, 1, 2), 112.0);
        assert!(series.value(2, 0, 0).is_nan());
    }

    #[test]
    fn test_sst_series_rejects_bad_year_count() {
        let grid = Grid::new(vec![0.0], vec![0.0]);
        assert!(SstSeries::new(grid, vec![1982, 1983], vec![0.0]).is_err());
    }
}
