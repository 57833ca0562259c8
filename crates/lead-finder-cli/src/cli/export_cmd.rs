//! `lead-finder export` — write the filtered leads to CSV or JSON.

use std::path::{Path, PathBuf};

use anyhow::Result;
use lead_finder::export::{self, ExportFormat};
use lead_finder::query;

use crate::cli::output::{self, Styled};
use crate::cli::{FilterArgs, Session};

pub fn run(
    session: &mut Session,
    filters: &FilterArgs,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let table = session.table()?;
    let leads = query::execute(table.leads(), &filters.to_query(&session.config));

    if out == Some(Path::new("-")) {
        print!("{}", format.render(&leads)?);
        return Ok(());
    }

    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    export::write_export(&path, format, &leads)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "count": leads.len(),
            "mime": format.mime_type(),
        }));
    } else if !output::is_quiet() {
        let s = Styled::new();
        eprintln!(
            "  {} Wrote {} lead(s) to {}",
            s.ok_sym(),
            leads.len(),
            path.display()
        );
    }
    Ok(())
}
