//! `lead-finder query` — show the best leads matching the filters.

use anyhow::Result;
use lead_finder::query;
use lead_finder::summary::{score_bar, score_label, ScoreBand};
use lead_finder::{Enrichment, Lead};
use tracing::info;

use crate::cli::output::{self, Styled};
use crate::cli::{FilterArgs, Session};

const BAR_WIDTH: usize = 10;

pub async fn run(session: &mut Session, filters: &FilterArgs, enrich: bool) -> Result<()> {
    let table = session.table()?;
    let query = filters.to_query(&session.config);
    let leads = query::execute(table.leads(), &query);
    info!("{} of {} leads match", leads.len(), table.len());

    let mut enrichments = Vec::new();
    if enrich {
        let enricher = session.enricher()?;
        for lead in &leads {
            enrichments.push(enricher.enrich(&lead.website).await);
        }
    }

    if output::is_json() {
        output::print_json(&leads_json(&leads, &enrichments)?);
        return Ok(());
    }

    let s = Styled::new();
    if !output::is_quiet() {
        output::print_header(&s);
    }
    println!("  Showing {} enriched leads", leads.len());
    println!();
    for (i, lead) in leads.iter().enumerate() {
        println!("{}", render_lead(&s, i + 1, lead, enrichments.get(i)));
    }
    Ok(())
}

/// Leads as JSON objects, with an `enrichment` field when available.
pub fn leads_json(leads: &[Lead], enrichments: &[Enrichment]) -> Result<serde_json::Value> {
    let mut rows = Vec::with_capacity(leads.len());
    for (i, lead) in leads.iter().enumerate() {
        let mut row = serde_json::to_value(lead)?;
        if let (Some(obj), Some(enrichment)) = (row.as_object_mut(), enrichments.get(i)) {
            obj.insert("enrichment".to_string(), serde_json::to_value(enrichment)?);
        }
        rows.push(row);
    }
    Ok(serde_json::Value::Array(rows))
}

/// One lead card: name and score bar, location line, reasons, and the
/// enrichment text if fetched.
pub fn render_lead(
    s: &Styled,
    rank: usize,
    lead: &Lead,
    enrichment: Option<&Enrichment>,
) -> String {
    let band = ScoreBand::from_score(lead.lead_score);
    let mut lines = vec![
        format!(
            "  {rank:>2}. {}  {} {}",
            s.bold(&lead.name),
            s.band(band, &score_label(lead.lead_score)),
            s.band(band, &score_bar(lead.lead_score, BAR_WIDTH)),
        ),
        format!(
            "      {} \u{00b7} {} \u{00b7} {}",
            lead.website, lead.industry, lead.location
        ),
        format!(
            "      {}",
            s.dim(&format!("{} \u{00b7} {}", lead.reason, lead.tech_stack))
        ),
    ];
    if let Some(enrichment) = enrichment {
        lines.push(format!("      {enrichment}"));
    }
    lines.join("\n")
}
