use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use calendar_server::{AppState, ServerConfig};
use calendar_store::{Database, EventRepo};
use calendar_telemetry::TelemetryConfig;

/// Calendar event REST service.
#[derive(Parser, Debug)]
#[command(name = "web-calendar", about = "Calendar event REST service")]
struct Cli {
    /// Address to bind, as HOST:PORT (default 127.0.0.1:5000).
    #[arg(env = "CALENDAR_ADDR", value_parser = ServerConfig::from_addr)]
    addr: Option<ServerConfig>,

    /// Path to the SQLite database file. Created if missing.
    #[arg(long, env = "CALENDAR_DB_PATH", default_value = "event_database.db")]
    db_path: PathBuf,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, env = "CALENDAR_LOG_LEVEL", default_value = "info")]
    log_level: Level,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    calendar_telemetry::init_telemetry(&TelemetryConfig {
        log_level: cli.log_level,
        module_levels: Vec::new(),
        json: cli.json_logs,
    })
    .context("Failed to initialize logging")?;

    tracing::info!("Starting web calendar");

    let db = Database::open(&cli.db_path)
        .with_context(|| format!("Failed to open database {}", cli.db_path.display()))?;

    let config = ServerConfig {
        request_timeout_secs: cli.request_timeout_secs,
        ..cli.addr.unwrap_or_default()
    };
    let handle = calendar_server::start(config, AppState::local(EventRepo::new(db)))
        .await
        .context("Failed to start server")?;

    tracing::info!(addr = %handle.addr(), "web calendar ready");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl+c")?;

    tracing::info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}
