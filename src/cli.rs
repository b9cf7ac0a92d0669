//! Command-line and environment configuration for HSA Roster
//!
//! Every option can be given as a flag or through its environment variable.
//! The API URL and key are required; everything else has a default.

use clap::Parser;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Error types for configuration validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The API URL is empty or whitespace
    #[error("API URL must not be empty")]
    EmptyApiUrl,

    /// The API URL is not an http(s) URL
    #[error("Invalid API URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidApiUrl(String),

    /// The cache TTL is zero
    #[error("Cache TTL must be at least one hour")]
    ZeroCacheTtl,

    /// The cache TTL does not fit in a duration
    #[error("Cache TTL of {0} hours is too large")]
    CacheTtlTooLarge(u64),
}

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

/// Parses a listen port, treating an empty value as unset
fn parse_port(s: &str) -> Result<u16, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    s.parse().map_err(|e| format!("invalid port '{}': {}", s, e))
}

/// HSA Roster - HSA eligibility and contribution limits for an employee roster
#[derive(Parser, Debug)]
#[command(name = "hsa-roster")]
#[command(about = "Serve HSA eligibility and contribution limits for an employee roster")]
#[command(version)]
pub struct Cli {
    /// Roster API endpoint
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// Bearer token for the roster API
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Hours a fetched roster stays valid
    #[arg(long, env = "CACHE_TTL_HOURS", default_value_t = 24)]
    pub cache_ttl_hours: u64,

    /// Attempts per roster fetch; 1 disables retries
    #[arg(long, env = "FETCH_ATTEMPTS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub fetch_attempts: u32,

    /// Delay between fetch attempts, in milliseconds
    #[arg(long, env = "RETRY_DELAY_MS", default_value_t = 500)]
    pub retry_delay_ms: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated server configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Roster API endpoint
    pub api_url: String,
    /// Bearer token for the roster API
    pub api_key: String,
    /// Socket address to listen on
    pub listen_addr: SocketAddr,
    /// Roster cache validity window
    pub cache_ttl: Duration,
    /// Attempts per roster fetch
    pub fetch_attempts: u32,
    /// Delay between fetch attempts
    pub retry_delay: Duration,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("listen_addr", &self.listen_addr)
            .field("cache_ttl", &self.cache_ttl)
            .field("fetch_attempts", &self.fetch_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl ServerConfig {
    /// Creates a ServerConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` with typed durations and listen address
    /// * `Err(CliError)` if the URL or cache TTL is unusable
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_url = cli.api_url.trim();
        if api_url.is_empty() {
            return Err(CliError::EmptyApiUrl);
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CliError::InvalidApiUrl(api_url.to_string()));
        }
        if cli.cache_ttl_hours == 0 {
            return Err(CliError::ZeroCacheTtl);
        }
        let cache_ttl_secs = cli
            .cache_ttl_hours
            .checked_mul(60 * 60)
            .ok_or(CliError::CacheTtlTooLarge(cli.cache_ttl_hours))?;

        Ok(ServerConfig {
            api_url: api_url.to_string(),
            api_key: cli.api_key.clone(),
            listen_addr: SocketAddr::new(cli.bind, cli.port),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            fetch_attempts: cli.fetch_attempts,
            retry_delay: Duration::from_millis(cli.retry_delay_ms),
        })
    }
}
