//! Record types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// One row of the source company table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Display name. Never empty once loaded.
    pub name: String,
    /// Bare or full URL. Used as the dedup key at query time.
    pub website: String,
    /// Open-ended category label, e.g. "Fintech".
    pub industry: String,
    /// Country or region label, e.g. "UK".
    pub location: String,
}

/// A company record with its derived lead columns.
///
/// Field order matches the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub website: String,
    pub industry: String,
    pub location: String,
    /// Heuristic score in `[0, 7]`, displayed out of 10.
    pub lead_score: u8,
    /// Triggered rule labels joined with ", ", or "General".
    pub reason: String,
    /// Illustrative stack label; cosmetic only.
    pub tech_stack: String,
}

impl Lead {
    /// Score a record and attach the given tech stack label.
    pub fn from_record(record: CompanyRecord, tech_stack: &str) -> Self {
        let lead_score = crate::scoring::score(&record);
        let reason = crate::scoring::reason(&record);
        Self {
            name: record.name,
            website: record.website,
            industry: record.industry,
            location: record.location,
            lead_score,
            reason,
            tech_stack: tech_stack.to_string(),
        }
    }

    /// The source fields of this lead.
    pub fn record(&self) -> CompanyRecord {
        CompanyRecord {
            name: self.name.clone(),
            website: self.website.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
        }
    }
}
