//! Lead Finder core library.
//!
//! Loads a company table, scores each company as a sales lead, enriches
//! leads with a short description scraped from their website, and answers
//! filter queries over the scored table. Presentation is left to callers;
//! the `lead-finder` binary is one such caller.

pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod loader;
pub mod query;
pub mod scoring;
pub mod summary;
pub mod tech_stack;
pub mod types;

pub use config::LeadFinderConfig;
pub use enrich::{Enricher, Enrichment, HttpFetcher, PageFetcher};
pub use error::{LeadError, Result};
pub use loader::{LeadTable, TableCache};
pub use query::LeadQuery;
pub use types::{CompanyRecord, Lead};
