//! Store configuration.

use std::path::{Path, PathBuf};

/// Default file name of the SST bundle inside the data directory.
pub const DEFAULT_SST_BUNDLE: &str = "sst_yearly.zarr";

/// Default file name of the warming-trend bundle inside the data directory.
pub const DEFAULT_WARMING_BUNDLE: &str = "warming.zarr";

/// Locations of the two input bundles.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding both bundles.
    pub data_dir: PathBuf,
    /// SST bundle name, relative to `data_dir`.
    pub sst_bundle: String,
    /// Warming bundle name, relative to `data_dir`.
    pub warming_bundle: String,
}

impl StoreConfig {
    /// Configuration with default bundle names under the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            sst_bundle: DEFAULT_SST_BUNDLE.to_string(),
            warming_bundle: DEFAULT_WARMING_BUNDLE.to_string(),
        }
    }

    /// Full path to the SST bundle.
    pub fn sst_path(&self) -> PathBuf {
        self.data_dir.join(&self.sst_bundle)
    }

    /// Full path to the warming bundle.
    pub fn warming_path(&self) -> PathBuf {
        self.data_dir.join(&self.warming_bundle)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Path::new("data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::default();
        assert_eq!(config.sst_path(), PathBuf::from("data/sst_yearly.zarr"));
        assert_eq!(config.warming_path(), PathBuf::from("data/warming.zarr"));
    }
}
