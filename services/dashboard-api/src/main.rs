//! Dashboard API Server
//!
//! Serves the interactive SST warming dashboard: a warming-trend heatmap
//! and a click-driven, window-averaged SST time series.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_api::state::AppState;

/// Dashboard API Server
#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "Interactive SST warming dashboard server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8000", env = "SST_LISTEN_ADDR")]
    listen: String,

    /// Directory holding the two input bundles
    #[arg(short, long, default_value = "data", env = "SST_DATA_DIR")]
    data_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Write synthetic demo bundles into the data directory before starting
    #[arg(long)]
    write_demo_data: bool,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting dashboard API server");

    if args.write_demo_data {
        if let Err(e) = sst_store::testdata::write_demo_bundles(&args.data_dir) {
            tracing::error!("Failed to write demo bundles: {}", e);
            std::process::exit(1);
        }
    }

    // Load the data bundles; a missing or malformed bundle is fatal.
    let state = match AppState::new(&args.data_dir) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    let app = dashboard_api::app(state);

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Dashboard API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
