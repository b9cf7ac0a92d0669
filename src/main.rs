//! HSA Roster - Serve HSA eligibility for an employee roster
//!
//! A small web service that fetches the employee roster from a table API,
//! computes HSA eligibility and maximum contributions, and renders the result
//! as an HTML page.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hsa_roster::cache::RosterCache;
use hsa_roster::cli::{Cli, ServerConfig};
use hsa_roster::data::RosterClient;
use hsa_roster::server::{self, AppState};

/// Sets up logging based on verbosity
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves when Ctrl-C is received
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ServerConfig::from_cli(&cli)?;

    let cache = Arc::new(RosterCache::new(config.cache_ttl));
    let client = RosterClient::new(config.api_url, config.api_key, cache)
        .with_retry(config.fetch_attempts, config.retry_delay);
    let app = server::router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %listener.local_addr()?, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
