//! Error types for the data store.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or writing the data bundles.
///
/// All of these are fatal at start-up: the process logs the error and exits
/// before binding the listener.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The bundle directory does not exist.
    #[error("bundle not found: {0}")]
    BundleNotFound(String),

    /// Failed to open a Zarr array.
    #[error("failed to open array: {0}")]
    OpenFailed(String),

    /// Failed to read data from a Zarr array.
    #[error("failed to read array data: {0}")]
    ReadFailed(String),

    /// An array's shape does not match its coordinate vectors.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A coordinate vector is empty or not strictly monotonic.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Storage/IO error.
    #[error("storage error: {0}")]
    StorageError(String),
}

impl StoreError {
    /// Create an OpenFailed error.
    pub fn open_failed(msg: impl Into<String>) -> Self {
        Self::OpenFailed(msg.into())
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::StorageError(err.to_string())
    }
}
