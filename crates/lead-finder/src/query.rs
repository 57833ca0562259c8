//! Query engine for filtering and ranking leads.

use std::collections::HashSet;

use crate::config::DEFAULT_RESULT_LIMIT;
use crate::types::Lead;

/// Filter parameters for [`execute`].
///
/// Empty `industries`, `locations` or `name_contains` mean "no restriction"
/// on that dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadQuery {
    /// Keep leads whose industry is one of these.
    pub industries: Vec<String>,
    /// Keep leads whose location is one of these.
    pub locations: Vec<String>,
    /// Keep leads whose name contains this, ignoring case.
    pub name_contains: String,
    /// Keep leads scoring at least this.
    pub min_score: u8,
    /// Maximum number of leads returned; values above
    /// [`DEFAULT_RESULT_LIMIT`] are capped to it.
    pub limit: usize,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            industries: Vec::new(),
            locations: Vec::new(),
            name_contains: String::new(),
            min_score: 0,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl LeadQuery {
    fn matches(&self, lead: &Lead, needle: &str) -> bool {
        (self.industries.is_empty() || self.industries.contains(&lead.industry))
            && (self.locations.is_empty() || self.locations.contains(&lead.location))
            && (needle.is_empty() || lead.name.to_lowercase().contains(needle))
            && lead.lead_score >= self.min_score
    }
}

/// Execute a query against the lead table.
///
/// Filters, then drops repeat websites keeping the first seen row, then
/// sorts by score descending (stable, so ties keep table order), then
/// truncates to `query.limit`, never more than [`DEFAULT_RESULT_LIMIT`].
/// The table itself is never modified.
///
/// Dedup runs before sorting: when two rows share a website, the earlier
/// row wins even if a later one scores higher.
pub fn execute(leads: &[Lead], query: &LeadQuery) -> Vec<Lead> {
    let needle = query.name_contains.to_lowercase();
    let mut seen = HashSet::new();

    let mut results: Vec<Lead> = leads
        .iter()
        .filter(|lead| query.matches(lead, &needle))
        .filter(|&lead| seen.insert(lead.website.as_str()))
        .cloned()
        .collect();

    results.sort_by(|a, b| b.lead_score.cmp(&a.lead_score));
    results.truncate(query.limit.min(DEFAULT_RESULT_LIMIT));
    results
}
