// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-page HTTP retrieval with a bounded timeout
//!
//! One outbound request per call, no retries. Dropping the returned
//! future cancels the request and releases its connection.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::ResearchConfig;
use super::types::ResearchError;

/// Page retrieval failures
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request did not finish within the configured timeout
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),
    /// Server answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus {
        /// Status code returned
        status: u16,
        /// URL that was requested
        url: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.url().map(|u| u.to_string()).unwrap_or_default())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

/// Anything that can hand back the raw text of a page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieve the body of an already normalized URL
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Prefix a missing scheme and check the result parses
///
/// Inputs without `http://` or `https://` get `https://` prepended. The
/// result must parse as an http(s) URL with a host, otherwise
/// [`ResearchError::InvalidUrlFormat`] is returned before any I/O.
pub fn normalize_url(raw: &str) -> Result<String, ResearchError> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();

    let invalid = || ResearchError::InvalidUrlFormat {
        url: raw.to_string(),
    };

    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if lower.contains("://") {
        // Some other scheme; only http(s) is fetched
        return Err(invalid());
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(candidate),
        _ => Err(invalid()),
    }
}

/// reqwest-backed page fetcher
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    /// Build a fetcher from the research configuration
    pub fn new(config: &ResearchConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching page: {}", url);
        let start = Instant::now();

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;

        info!(
            "Fetched {} bytes from {} in {}ms",
            body.len(),
            url,
            start.elapsed().as_millis()
        );
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
