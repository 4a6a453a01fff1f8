// src/client.rs
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::CrtshError;
use crate::types::CtLogEntry;

/// Build the download URL for a certificate ID (`{base}?d=<id>`).
///
/// Shared between the retrieval path and the per-entry download link in
/// full-record output.
pub fn certificate_download_url(base: &Url, cert_id: i64) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("d", &cert_id.to_string());
    url
}

/// HTTP client for the crt.sh search and download endpoints
pub struct CrtshClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl CrtshClient {
    /// Create a new crt.sh client from configuration.
    ///
    /// The base URL is injected here rather than hardwired so tests can
    /// point the client at a mock server.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid crt.sh base URL: {}", config.base_url))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// The configured service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one GET request and return the raw response body.
    ///
    /// Any status other than 200 is a hard failure. reqwest drops the
    /// response on every exit path, so the connection is released whether
    /// the call succeeds, hits a bad status, or fails mid-read.
    async fn fetch(&self, url: Url) -> Result<Vec<u8>, CrtshError> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CrtshError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CrtshError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CrtshError::Transport {
                url: url.to_string(),
                source,
            })?;

        Ok(body.to_vec())
    }

    /// Build a search URL: base + `output=json` + one query parameter.
    fn search_url(&self, param: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("output", "json")
            .append_pair(param, value);
        url
    }

    /// Free-text search (`?output=json&q=<text>`).
    ///
    /// An empty string is a valid, if unhelpful, query. The result order is
    /// whatever the server returned; no local cap is applied.
    pub async fn query_by_text(&self, text: &str) -> Result<Vec<CtLogEntry>, CrtshError> {
        self.query(self.search_url("q", text)).await
    }

    /// Common-name search (`?output=json&CN=<name>`).
    pub async fn query_by_common_name(&self, cn: &str) -> Result<Vec<CtLogEntry>, CrtshError> {
        self.query(self.search_url("CN", cn)).await
    }

    async fn query(&self, url: Url) -> Result<Vec<CtLogEntry>, CrtshError> {
        let body = self.fetch(url).await?;

        let entries: Vec<CtLogEntry> = serde_json::from_slice(&body)?;

        debug!("Received {} log entries", entries.len());

        Ok(entries)
    }

    /// Download the raw PEM document for a certificate ID (`?d=<id>`).
    ///
    /// IDs are not validated locally; an ID the service does not recognize
    /// comes back as a status error.
    pub async fn fetch_certificate_pem(&self, cert_id: i64) -> Result<Vec<u8>, CrtshError> {
        let url = certificate_download_url(&self.base_url, cert_id);
        self.fetch(url).await
    }
}
