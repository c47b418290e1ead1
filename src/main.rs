//! Stratagem - Marketing Strategy Intelligence Service
//!
//! Serves the market-analysis / strategic-analysis / content-creation API.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (binds 0.0.0.0:8080)
//! cargo run --release
//!
//! # Override the bind address
//! ./stratagem --addr 127.0.0.1:9000
//!
//! # Run against a deployment config
//! ./stratagem --config deploy/stratagem.toml
//! ```
//!
//! # Environment Variables
//!
//! - `STRATAGEM_CONFIG`: Path to TOML service configuration
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use stratagem::api::{create_app, AppState};
use stratagem::config::ServiceConfig;
use stratagem::generator::{CannedGenerator, Generator};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "stratagem")]
#[command(about = "Stratagem Marketing Strategy Intelligence Service")]
#[command(version)]
struct CliArgs {
    /// Override the server bind address (default: from config, "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to TOML service configuration
    #[arg(long, env = "STRATAGEM_CONFIG")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = ServiceConfig::load(args.config.as_deref())
        .context("Failed to load service configuration")?;
    let addr = args.addr.unwrap_or_else(|| config.server.addr.clone());

    let generator: Arc<dyn Generator> = Arc::new(CannedGenerator::new());
    info!(backend = generator.backend_name(), "✓ Generation backend ready");

    let app = create_app(AppState::new(generator), &config.server.cors_origins);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("🌐 HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}
