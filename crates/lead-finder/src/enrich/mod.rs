//! Best-effort lead enrichment from company websites.
//!
//! Each distinct URL is fetched at most once per [`Enricher`]; the outcome,
//! failures included, is remembered for the enricher's lifetime. Nothing
//! here returns an error: failures collapse into
//! [`Enrichment::Unavailable`].

pub mod fetcher;
pub mod meta;

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;
use url::Url;

use crate::config::LeadFinderConfig;
use crate::error::Result;

pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use meta::{extract_meta_description, normalize_url};

/// Text shown when the page has no usable meta description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Text shown when the page could not be fetched.
pub const UNAVAILABLE: &str = "Could not retrieve info.";

/// Outcome of enriching one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
    /// The page's meta description, verbatim.
    Description(String),
    /// The page loaded but had no non-empty meta description.
    NoDescription,
    /// The page could not be fetched.
    Unavailable,
}

impl Enrichment {
    /// Display text: the description or one of the two sentinels.
    pub fn as_str(&self) -> &str {
        match self {
            Enrichment::Description(text) => text,
            Enrichment::NoDescription => NO_DESCRIPTION,
            Enrichment::Unavailable => UNAVAILABLE,
        }
    }

    pub fn is_description(&self) -> bool {
        matches!(self, Enrichment::Description(_))
    }
}

impl fmt::Display for Enrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Enrichment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Memoizing website enricher.
pub struct Enricher<F = HttpFetcher> {
    fetcher: F,
    cache: HashMap<String, Enrichment>,
}

impl Enricher<HttpFetcher> {
    /// Enricher using the configured timeout and User-Agent.
    pub fn from_config(config: &LeadFinderConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::from_config(config)?))
    }
}

impl<F: PageFetcher> Enricher<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: HashMap::new(),
        }
    }

    /// Describe the site at `url`.
    ///
    /// Bare domains are fetched over `http://`. Repeat calls with the same
    /// `url` return the remembered result without touching the network.
    pub async fn enrich(&mut self, url: &str) -> Enrichment {
        if let Some(hit) = self.cache.get(url) {
            debug!("enrichment cache hit for {url}");
            return hit.clone();
        }

        let result = self.fetch_and_extract(url).await;
        self.cache.insert(url.to_string(), result.clone());
        result
    }

    async fn fetch_and_extract(&self, raw: &str) -> Enrichment {
        let normalized = normalize_url(raw);
        let url = match Url::parse(&normalized) {
            Ok(url) => url,
            Err(source) => {
                let err = FetchError::InvalidUrl {
                    url: normalized,
                    source,
                };
                debug!("enrichment failed for '{raw}': {err}");
                return Enrichment::Unavailable;
            }
        };

        match self.fetcher.fetch(&url).await {
            Ok(body) => match extract_meta_description(&body) {
                Some(text) => Enrichment::Description(text),
                None => Enrichment::NoDescription,
            },
            Err(err) => {
                debug!("enrichment failed for '{raw}': {err}");
                Enrichment::Unavailable
            }
        }
    }

    /// Previously computed result for `url`, if any.
    pub fn cached(&self, url: &str) -> Option<&Enrichment> {
        self.cache.get(url)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forget every remembered result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
