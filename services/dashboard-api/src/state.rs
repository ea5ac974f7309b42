//! Application state for the dashboard API.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use sst_store::{DataStore, StoreConfig};

/// Shared application state.
///
/// The data store is loaded once at start-up and shared read-only across
/// all request handlers; nothing here is mutated after construction.
pub struct AppState {
    /// The loaded datasets.
    pub store: Arc<DataStore>,
}

impl AppState {
    /// Load the data bundles from the given directory.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = StoreConfig::new(data_dir);
        let store = DataStore::load(&config)
            .with_context(|| format!("loading data bundles from {}", data_dir.display()))?;
        Ok(Self { store })
    }
}
