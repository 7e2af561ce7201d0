use std::time::Instant;

use bytes::Bytes;
use reqwest::{header, StatusCode};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::Config;

/// Media type that makes the contents API return the file verbatim instead
/// of a base64 JSON envelope.
pub(crate) const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("content request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content request returned {0}")]
    Status(StatusCode),
}

/// Client for the GitHub contents API, pinned to the configured repository
/// and branch.
#[derive(Debug, Clone)]
pub(crate) struct ContentClient {
    http: reqwest::Client,
    config: Config,
}

impl ContentClient {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the raw content of `path` from the configured repository and
    /// branch. A single attempt; any non-2xx response is an error and its
    /// body is discarded.
    pub(crate) async fn fetch(&self, path: &str) -> Result<Bytes, FetchError> {
        let url = format!(
            "{}/repos/{}/contents/{}",
            self.config.api_url, self.config.repo, path
        );
        let start = Instant::now();

        tracing::debug!(source = %url, at = "start");

        let response = self
            .http
            .get(&url)
            .query(&[("ref", self.config.branch.as_str())])
            .header(header::ACCEPT, ACCEPT_RAW)
            .bearer_auth(self.config.token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(source = %url, status = %status, took = ?start.elapsed(), at = "finish");

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.bytes().await?)
    }
}
