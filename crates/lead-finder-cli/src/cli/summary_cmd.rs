//! `lead-finder summary` — headline insights over the whole table.

use anyhow::Result;
use lead_finder::summary::{Summary, ValueCount};

use crate::cli::output::{self, Styled};
use crate::cli::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let table = session.table()?;
    let summary = Summary::from_leads(table.leads());

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "summary": summary,
            "industries": table.industries(),
            "locations": table.locations(),
        }));
        return Ok(());
    }

    let s = Styled::new();
    if !output::is_quiet() {
        output::print_header(&s);
    }
    println!("  {} companies loaded", summary.total);
    println!();
    output::print_section(&s, "Top Industries");
    print_counts(&summary.top_industries);
    output::print_section(&s, "Top Countries");
    print_counts(&summary.top_locations);
    println!();
    output::print_section(&s, "Filter Options");
    println!("    industry: {}", table.industries().join(", "));
    println!("    location: {}", table.locations().join(", "));
    Ok(())
}

fn print_counts(counts: &[ValueCount]) {
    for entry in counts {
        println!("    {:<20} {}", entry.value, entry.count);
    }
}
