//! Dashboard insights: value counts over the table and score banding.

use fnv::FnvHashMap;
use serde::Serialize;

use crate::scoring::DISPLAY_SCALE;
use crate::types::Lead;

/// How many entries the summary keeps per dimension.
pub const SUMMARY_TOP_N: usize = 3;

/// A distinct value and how many leads carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Headline numbers for a lead table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub top_industries: Vec<ValueCount>,
    pub top_locations: Vec<ValueCount>,
}

impl Summary {
    pub fn from_leads(leads: &[Lead]) -> Self {
        Self {
            total: leads.len(),
            top_industries: top_industries(leads, SUMMARY_TOP_N),
            top_locations: top_locations(leads, SUMMARY_TOP_N),
        }
    }
}

/// The `n` most common industries, most common first.
pub fn top_industries(leads: &[Lead], n: usize) -> Vec<ValueCount> {
    value_counts(leads.iter().map(|l| l.industry.as_str()), n)
}

/// The `n` most common locations, most common first.
pub fn top_locations(leads: &[Lead], n: usize) -> Vec<ValueCount> {
    value_counts(leads.iter().map(|l| l.location.as_str()), n)
}

// Ties keep first-appearance order.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>, n: usize) -> Vec<ValueCount> {
    let mut counts: FnvHashMap<&str, (usize, usize)> = FnvHashMap::default();
    for (index, value) in values.enumerate() {
        counts.entry(value).or_insert((index, 0)).1 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(_, (a_first, a_count)), (_, (b_first, b_count))| {
        b_count.cmp(a_count).then(a_first.cmp(b_first))
    });
    ranked
        .into_iter()
        .take(n)
        .map(|(value, (_, count))| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Coarse quality band of a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            ScoreBand::Strong
        } else if score >= 5 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

/// `score/10` as shown next to each lead.
pub fn score_label(score: u8) -> String {
    format!("{score}/{DISPLAY_SCALE}")
}

/// Fixed-width bar filled in proportion to `score` out of 10.
pub fn score_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(DISPLAY_SCALE)) * width) / usize::from(DISPLAY_SCALE);
    format!(
        "[{}{}]",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}
