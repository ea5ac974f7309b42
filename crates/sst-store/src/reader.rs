//! Low-level Zarr array reading.

use std::path::Path;
use std::sync::Arc;

use zarrs::array::Array;
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

use crate::error::{Result, StoreError};

/// Open the filesystem store backing a bundle directory.
pub fn open_bundle(path: &Path) -> Result<Arc<FilesystemStore>> {
    if !path.is_dir() {
        return Err(StoreError::BundleNotFound(path.display().to_string()));
    }
    let store = FilesystemStore::new(path)
        .map_err(|e| StoreError::open_failed(format!("{}: {}", path.display(), e)))?;
    Ok(Arc::new(store))
}

/// Open a named array within a bundle.
pub fn open_array(store: &Arc<FilesystemStore>, name: &str) -> Result<Array<FilesystemStore>> {
    Array::open(store.clone(), &format!("/{}", name))
        .map_err(|e| StoreError::open_failed(format!("array '{}': {}", name, e)))
}

/// Read an entire float64 array.
pub fn read_f64(array: &Array<FilesystemStore>) -> Result<Vec<f64>> {
    let subset = full_subset(array)?;
    let data: Vec<f64> = array
        .retrieve_array_subset_elements(&subset)
        .map_err(|e| StoreError::read_failed(e.to_string()))?;
    Ok(data)
}

/// Read an entire int64 array.
pub fn read_i64(array: &Array<FilesystemStore>) -> Result<Vec<i64>> {
    let subset = full_subset(array)?;
    let data: Vec<i64> = array
        .retrieve_array_subset_elements(&subset)
        .map_err(|e| StoreError::read_failed(e.to_string()))?;
    Ok(data)
}

/// Read a 1-D float64 coordinate vector, rejecting higher-rank arrays.
pub fn read_coord(store: &Arc<FilesystemStore>, name: &str) -> Result<Vec<f64>> {
    let array = open_array(store, name)?;
    if array.shape().len() != 1 {
        return Err(StoreError::shape_mismatch(format!(
            "coordinate '{}' must be 1-D, got shape {:?}",
            name,
            array.shape()
        )));
    }
    read_f64(&array)
}

fn full_subset(array: &Array<FilesystemStore>) -> Result<ArraySubset> {
    let shape = array.shape().to_vec();
    ArraySubset::new_with_start_shape(vec![0; shape.len()], shape)
        .map_err(|e| StoreError::read_failed(e.to_string()))
}
