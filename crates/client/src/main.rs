//! Player inventory client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Data source - the JSONBin player document over HTTP
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! PLAYER_DATA_URL=https://api.jsonbin.io/v3/b/<bin> cargo run -p inventory-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use std::path::PathBuf;

    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use inventory_client::Client;
    use player_data::{JsonBinConfig, JsonBinSource};

    // 1. Load configuration from environment
    let source_config = JsonBinConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let log_dir = std::env::var_os("INVENTORY_LOG_DIR").map(PathBuf::from);

    // 2. Setup logging
    let _log_guard = logging::setup_logging(log_dir.as_deref())?;

    tracing::info!("Starting inventory client");
    tracing::info!("Player data URL: {}", source_config.url);
    tracing::info!(
        "Access key: {}",
        if source_config.access_key.is_some() {
            "set"
        } else {
            "not set"
        }
    );
    tracing::debug!("Display: {:?}", frontend_config.display);

    // 3. Build data source (independent layer)
    let source = JsonBinSource::new(source_config);

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(cli_config);

    // 5. Build and run
    let client = Client::builder()
        .data_source(source)
        .frontend(frontend)
        .display(frontend_config.display)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
