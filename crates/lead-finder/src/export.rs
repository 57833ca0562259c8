//! CSV and JSON renderings of a lead result set.

use std::path::Path;
use std::str::FromStr;

use crate::error::{LeadError, Result};
use crate::types::Lead;

/// Export column order; matches [`Lead`]'s field order.
pub const COLUMNS: [&str; 7] = [
    "name",
    "website",
    "industry",
    "location",
    "lead_score",
    "reason",
    "tech_stack",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File name used when the caller gives none.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "filtered_leads.csv",
            ExportFormat::Json => "crm_leads.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn render(self, leads: &[Lead]) -> Result<String> {
        match self {
            ExportFormat::Csv => to_csv(leads),
            ExportFormat::Json => to_json(leads),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(LeadError::Configuration(format!(
                "unknown export format '{other}' (expected csv or json)"
            ))),
        }
    }
}

/// Header row plus one row per lead. The header is written even when
/// `leads` is empty.
pub fn to_csv(leads: &[Lead]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for lead in leads {
        writer.serialize(lead)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A JSON array of lead objects, in result order.
pub fn to_json(leads: &[Lead]) -> Result<String> {
    Ok(serde_json::to_string(leads)?)
}

/// Render `leads` and write them to `path`, creating parent directories.
pub fn write_export(path: &Path, format: ExportFormat, leads: &[Lead]) -> Result<()> {
    let contents = format.render(leads)?;
    let write_err = |source: std::io::Error| LeadError::WriteExport {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)
}
