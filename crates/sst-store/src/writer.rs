//! Zarr bundle writer.
//!
//! Writes bundles with the same logical schema the loader expects. This
//! backs the test fixtures and the demo-data escape hatch; the production
//! bundles come from the external data-preparation step.

use std::path::Path;
use std::sync::Arc;

use zarrs::array::{ArrayBuilder, DataType, FillValue};
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

use sst_common::Grid;

use crate::error::{Result, StoreError};

/// Write an SST bundle: `lon`, `lat`, `years`, `sst_yearly`.
///
/// `values` is `[T, nlat, nlon]` row-major and must match the grid and
/// `years` lengths.
pub fn write_sst_bundle(path: &Path, grid: &Grid, years: &[i32], values: &[f64]) -> Result<()> {
    let (nlon, nlat, t) = (grid.nlon(), grid.nlat(), years.len());
    if values.len() != t * nlat * nlon {
        return Err(StoreError::shape_mismatch(format!(
            "sst_yearly has {} values, expected {}x{}x{}",
            values.len(),
            t,
            nlat,
            nlon
        )));
    }

    let store = create_store(path)?;
    write_f64_array(&store, "lon", vec![nlon as u64], &grid.lon, "degrees_east")?;
    write_f64_array(&store, "lat", vec![nlat as u64], &grid.lat, "degrees_north")?;
    write_i64_array(
        &store,
        "years",
        vec![t as u64],
        &years.iter().map(|&y| y as i64).collect::<Vec<_>>(),
    )?;
    write_f64_array(
        &store,
        "sst_yearly",
        vec![t as u64, nlat as u64, nlon as u64],
        values,
        "degC",
    )?;
    Ok(())
}

/// Write a warming bundle: `lon`, `lat`, `slopes`.
///
/// `slopes` is `[nlat, nlon]` row-major.
pub fn write_warming_bundle(path: &Path, grid: &Grid, slopes: &[f64]) -> Result<()> {
    let (nlon, nlat) = (grid.nlon(), grid.nlat());
    if slopes.len() != nlat * nlon {
        return Err(StoreError::shape_mismatch(format!(
            "slopes has {} values, expected {}x{}",
            slopes.len(),
            nlat,
            nlon
        )));
    }

    let store = create_store(path)?;
    write_f64_array(&store, "lon", vec![nlon as u64], &grid.lon, "degrees_east")?;
    write_f64_array(&store, "lat", vec![nlat as u64], &grid.lat, "degrees_north")?;
    write_f64_array(
        &store,
        "slopes",
        vec![nlat as u64, nlon as u64],
        slopes,
        "degC/yr",
    )?;
    Ok(())
}

fn create_store(path: &Path) -> Result<Arc<FilesystemStore>> {
    std::fs::create_dir_all(path)?;
    let store = FilesystemStore::new(path)
        .map_err(|e| StoreError::StorageError(format!("{}: {}", path.display(), e)))?;
    Ok(Arc::new(store))
}

fn write_f64_array(
    store: &Arc<FilesystemStore>,
    name: &str,
    shape: Vec<u64>,
    data: &[f64],
    units: &str,
) -> Result<()> {
    if shape.iter().any(|&n| n == 0) {
        return Err(StoreError::shape_mismatch(format!(
            "array '{}' has an empty axis: {:?}",
            name, shape
        )));
    }

    let mut attrs = serde_json::Map::new();
    attrs.insert("units".to_string(), serde_json::json!(units));

    // Bundles are small; each array is stored as a single chunk.
    let chunk_grid: zarrs::array::ChunkGrid = shape
        .clone()
        .try_into()
        .map_err(|e| StoreError::StorageError(format!("{:?}", e)))?;

    let mut binding = ArrayBuilder::new(
        shape.clone(),
        DataType::Float64,
        chunk_grid,
        FillValue::from(f64::NAN),
    );
    let builder = binding.attributes(attrs);

    let array = builder
        .build(store.clone(), &format!("/{}", name))
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    array
        .store_metadata()
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    let subset = ArraySubset::new_with_start_shape(vec![0; shape.len()], shape)
        .map_err(|e| StoreError::StorageError(e.to_string()))?;
    array
        .store_array_subset_elements(&subset, data)
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    Ok(())
}

fn write_i64_array(
    store: &Arc<FilesystemStore>,
    name: &str,
    shape: Vec<u64>,
    data: &[i64],
) -> Result<()> {
    if shape.iter().any(|&n| n == 0) {
        return Err(StoreError::shape_mismatch(format!(
            "array '{}' has an empty axis: {:?}",
            name, shape
        )));
    }

    let chunk_grid: zarrs::array::ChunkGrid = shape
        .clone()
        .try_into()
        .map_err(|e| StoreError::StorageError(format!("{:?}", e)))?;

    let binding = ArrayBuilder::new(
        shape.clone(),
        DataType::Int64,
        chunk_grid,
        FillValue::from(0i64),
    );

    let array = binding
        .build(store.clone(), &format!("/{}", name))
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    array
        .store_metadata()
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    let subset = ArraySubset::new_with_start_shape(vec![0; shape.len()], shape)
        .map_err(|e| StoreError::StorageError(e.to_string()))?;
    array
        .store_array_subset_elements(&subset, data)
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

    Ok(())
}
