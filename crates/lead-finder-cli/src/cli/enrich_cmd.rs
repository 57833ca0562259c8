//! `lead-finder enrich` — describe websites directly.

use anyhow::Result;

use crate::cli::output::{self, Styled};
use crate::cli::Session;

pub async fn run(session: &mut Session, urls: &[String]) -> Result<()> {
    let enricher = session.enricher()?;
    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        results.push((url, enricher.enrich(url).await));
    }

    if output::is_json() {
        let rows: Vec<_> = results
            .iter()
            .map(|(url, result)| {
                serde_json::json!({
                    "url": url,
                    "description": result.as_str(),
                    "found": result.is_description(),
                })
            })
            .collect();
        output::print_json(&serde_json::Value::Array(rows));
        return Ok(());
    }

    let s = Styled::new();
    for (url, result) in &results {
        let sym = if result.is_description() {
            s.ok_sym()
        } else {
            s.warn_sym()
        };
        println!("  {sym} {}", s.bold(url));
        println!("      {result}");
    }
    Ok(())
}
