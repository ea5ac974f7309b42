//! Data store for the SST warming dashboard.
//!
//! Loads two precomputed Zarr bundles at start-up — the annual SST cube and
//! the per-cell warming-trend grid — and serves spatially-averaged time
//! series extracted around a clicked coordinate. Both datasets are immutable
//! after load and safe to share read-only across request handlers.

pub mod config;
pub mod error;
pub mod extract;
pub mod reader;
pub mod store;
pub mod testdata;
pub mod writer;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use extract::WindowSeries;
pub use store::{DataStore, SstSeries, WarmingField};
