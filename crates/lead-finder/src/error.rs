use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the company table or writing exports.
///
/// Scoring, querying and enrichment never fail; only the edges that touch
/// the filesystem do.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("failed to read company table {}: {source}", path.display())]
    ReadTable { path: PathBuf, source: io::Error },
    #[error("malformed company table: {0}")]
    Table(#[from] csv::Error),
    #[error("company table row {row} has an empty name")]
    EmptyName { row: usize },
    #[error("failed to write export {}: {source}", path.display())]
    WriteExport { path: PathBuf, source: io::Error },
    #[error("failed to serialize leads: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, LeadError>;
