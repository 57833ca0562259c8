//! Runtime configuration with environment overrides.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{LeadError, Result};

/// Default company table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "companies.csv";

/// Enrichment request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Browser-like identification sent with enrichment requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Maximum number of leads a query returns.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Settings shared by the loader, enricher and query front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFinderConfig {
    /// Path of the company table.
    pub data_path: PathBuf,
    /// Enrichment request timeout.
    pub timeout: Duration,
    /// User-Agent header for enrichment requests.
    pub user_agent: String,
    /// Query result limit.
    pub result_limit: usize,
}

impl Default for LeadFinderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl LeadFinderConfig {
    /// Defaults overridden by `LEAD_FINDER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `LEAD_FINDER_*` key. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("LEAD_FINDER_DATA") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(secs) = get("LEAD_FINDER_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| {
                    LeadError::Configuration(format!(
                        "LEAD_FINDER_TIMEOUT_SECS must be a positive number of seconds, got '{secs}'"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = get("LEAD_FINDER_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(limit) = get("LEAD_FINDER_LIMIT") {
            config.result_limit = limit
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&limit| limit <= DEFAULT_RESULT_LIMIT)
                .ok_or_else(|| {
                    LeadError::Configuration(format!(
                        "LEAD_FINDER_LIMIT must be an integer from 0 to {DEFAULT_RESULT_LIMIT}, got '{limit}'"
                    ))
                })?;
        }

        Ok(config)
    }
}
