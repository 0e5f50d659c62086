//! HTTP fetcher for the shared board file.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};

use super::{BackendError, TextFetcher};

/// Fetches the board text with a plain GET, trying each endpoint in order.
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoints: Vec<String>,
}

impl HttpFetcher {
    /// Build a fetcher over `endpoints` (primary first) with a request timeout.
    pub fn new(endpoints: Vec<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoints })
    }

    /// Endpoints in the order they are tried
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    async fn fetch_one(&self, url: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Network(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Network(format!("GET {url}: HTTP {}", status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| BackendError::Network(format!("Failed to read response body from {url}: {e}")))
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch(&self) -> Option<String> {
        for url in &self.endpoints {
            debug!("Fetching board from {url}");
            match self.fetch_one(url).await {
                Ok(body) => {
                    info!("✅ Fetched {} bytes from {url}", body.len());
                    return Some(body);
                }
                Err(e) => warn!("⚠️  {e}"),
            }
        }
        None
    }
}
