//! Page fetching for enrichment.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::config::LeadFinderConfig;
use crate::error::{LeadError, Result};

/// Why a page could not be fetched. Never leaves the enricher.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetches a page body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the decoded body of a 2xx response.
    async fn fetch(&self, url: &Url) -> std::result::Result<String, FetchError>;
}

/// Fetcher backed by a `reqwest` client with a fixed timeout and
/// User-Agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| LeadError::Configuration(format!("http client: {e}")))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &LeadFinderConfig) -> Result<Self> {
        Self::new(config.timeout, &config.user_agent)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> std::result::Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
