//! Pingboard Server Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use pingboard::cli::Cli;
use pingboard::common::config::ServerConfig;
use pingboard::prober::HttpProber;
use pingboard::store::{JsonFileStore, MemoryStore};
use pingboard::{api, logging, shutdown, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from(Cli::parse());
    let _log_guard = logging::init()?;

    run_server(config).await
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Pingboard v{}", env!("CARGO_PKG_VERSION"));
    config.validate()?;

    let prober = HttpProber::new(config.probe_timeout())?;
    let state = if config.in_memory {
        info!("History is kept in memory only");
        AppState::new(MemoryStore::new(), prober)
    } else {
        info!(path = %config.data_file.display(), "Using history file");
        AppState::new(JsonFileStore::new(&config.data_file), prober)
    };

    let app = api::create_app(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!(
        addr = %listener.local_addr()?,
        probe_timeout_secs = config.probe_timeout_secs,
        "Pingboard server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
