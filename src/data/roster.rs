//! Roster API client
//!
//! Fetches the employee roster from the configured table API, authenticating
//! with a bearer token, and keeps the parsed roster in the shared
//! [`RosterCache`].

use super::Employee;
use crate::cache::RosterCache;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when fetching the roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Roster API returned status {0}")]
    UnexpectedStatus(StatusCode),

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Response body of the roster API: `{ "records": [ { "fields": {...} } ] }`
#[derive(Debug, Deserialize)]
struct ApiResponse {
    records: Vec<ApiRecord>,
}

/// A single table row from the API
#[derive(Debug, Deserialize)]
struct ApiRecord {
    fields: Employee,
}

/// Client for fetching the employee roster, backed by an in-memory cache
#[derive(Clone)]
pub struct RosterClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Shared roster cache
    cache: Arc<RosterCache>,
    /// Roster endpoint URL
    api_url: String,
    /// Bearer token sent with every request
    api_key: String,
    /// Number of attempts per cache miss; 1 means no retry
    fetch_attempts: u32,
    /// Fixed delay between attempts
    retry_delay: Duration,
}

impl fmt::Debug for RosterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("fetch_attempts", &self.fetch_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

impl RosterClient {
    /// Creates a single-shot client for the given endpoint and token
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        cache: Arc<RosterCache>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            cache,
            api_url: api_url.into(),
            api_key: api_key.into(),
            fetch_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }

    /// Sets how many times a failed fetch is attempted, and the delay between
    /// attempts. An attempt count of zero is treated as one.
    pub fn with_retry(mut self, fetch_attempts: u32, retry_delay: Duration) -> Self {
        self.fetch_attempts = fetch_attempts.max(1);
        self.retry_delay = retry_delay;
        self
    }

    /// Returns the unprocessed roster, from cache when fresh
    ///
    /// # Behavior
    /// - If the cache holds a fresh, non-empty roster, returns it
    /// - Otherwise fetches from the API, parses the body, replaces the cache
    ///   contents and returns the new roster
    /// - Network, status, and parse failures are returned to the caller; the
    ///   cache is left untouched
    pub async fn fetch_employees(&self) -> Result<Arc<Vec<Employee>>, RosterError> {
        if let Some(cached) = self.cache.fresh() {
            debug!(count = cached.len(), "Roster cache hit");
            return Ok(cached);
        }

        let body = self.fetch_with_retry().await?;
        let employees = parse_response(&body)?;
        info!(count = employees.len(), "Fetched roster from API");

        Ok(self.cache.write(employees))
    }

    /// Fetches the raw body, retrying transport and status failures
    async fn fetch_with_retry(&self) -> Result<Vec<u8>, RosterError> {
        let mut attempt = 1;
        loop {
            match self.fetch_from_api().await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.fetch_attempts => {
                    warn!(
                        attempt,
                        max_attempts = self.fetch_attempts,
                        error = %e,
                        "Roster fetch failed, retrying"
                    );
                    attempt += 1;
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Issues the authenticated GET and reads the full body
    async fn fetch_from_api(&self) -> Result<Vec<u8>, RosterError> {
        let response = self
            .http_client
            .get(&self.api_url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::UnexpectedStatus(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Parses a roster API body into employee records, preserving row order
pub fn parse_response(body: &[u8]) -> Result<Vec<Employee>, RosterError> {
    let response: ApiResponse = serde_json::from_slice(body)?;
    Ok(response.records.into_iter().map(|record| record.fields).collect())
}
