//! HTTP status fetcher.
//!
//! One bounded-timeout GET per node per tick, no retries. Every transport,
//! timeout, and HTTP-status failure is converted into a typed `FetchError`
//! at this boundary; a persistently failing node simply shows up unreachable
//! again on the next tick.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Why a node's stats page could not be retrieved this tick.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

impl FetchError {
    /// Short classification tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "http_status",
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Retrieves one endpoint's plaintext stats body per call.
#[derive(Clone)]
pub struct StatusFetcher {
    client: reqwest::Client,
}

impl StatusFetcher {
    /// Build a fetcher whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch one endpoint's body. A 2xx response yields the raw text;
    /// everything else comes back as a `FetchError` — nothing escapes past
    /// this boundary.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::from_reqwest)?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
