//! AirWatch Pipeline - Main Entry Point

use anyhow::Result;
use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== AirWatch Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting air quality analytics system...");

    let settings = Settings::load()?;
    run_server(settings).await
}
