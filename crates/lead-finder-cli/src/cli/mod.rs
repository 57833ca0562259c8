//! CLI subcommand implementations for the `lead-finder` binary.

pub mod enrich_cmd;
pub mod export_cmd;
pub mod output;
pub mod query_cmd;
pub mod summary_cmd;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lead_finder::config::DEFAULT_RESULT_LIMIT;
use lead_finder::export::ExportFormat;
use lead_finder::{Enricher, LeadFinderConfig, LeadQuery, LeadTable, TableCache};

/// Find, score, and enrich high-quality B2B leads.
#[derive(Debug, Parser)]
#[command(name = "lead-finder", version)]
pub struct Cli {
    /// Company table (CSV with name, website, industry, location columns).
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Emit machine-readable JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress progress and status lines.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the best leads matching the filters.
    Query {
        #[command(flatten)]
        filters: FilterArgs,
        /// Fetch a description from each listed website.
        #[arg(long)]
        enrich: bool,
    },
    /// Write the filtered leads as CSV or JSON.
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// csv or json.
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Output file; `-` writes to stdout. Defaults per format.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Summarize the whole table.
    Summary,
    /// Describe the given websites.
    Enrich {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

/// Sidebar filters shared by `query` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Keep leads in this industry (repeatable).
    #[arg(long = "industry", value_name = "INDUSTRY")]
    pub industries: Vec<String>,

    /// Keep leads in this location (repeatable).
    #[arg(long = "location", value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// Keep leads whose name contains this, ignoring case.
    #[arg(long)]
    pub search: Option<String>,

    /// Minimum lead score.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub min_score: u8,

    /// Maximum number of leads shown (at most 10).
    #[arg(long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    pub fn to_query(&self, config: &LeadFinderConfig) -> LeadQuery {
        LeadQuery {
            industries: self.industries.clone(),
            locations: self.locations.clone(),
            name_contains: self.search.clone().unwrap_or_default(),
            min_score: self.min_score,
            limit: self
                .limit
                .unwrap_or(config.result_limit)
                .min(DEFAULT_RESULT_LIMIT),
        }
    }
}

/// Process-wide state: configuration plus the table and enrichment caches.
pub struct Session {
    pub config: LeadFinderConfig,
    tables: TableCache,
    enricher: Option<Enricher>,
}

impl Session {
    pub fn new(config: LeadFinderConfig) -> Self {
        Self {
            config,
            tables: TableCache::new(),
            enricher: None,
        }
    }

    /// The scored company table, loaded on first use.
    pub fn table(&mut self) -> Result<Arc<LeadTable>> {
        let path = self.config.data_path.clone();
        self.tables
            .get_or_load(&path, &mut rand::thread_rng())
            .with_context(|| format!("loading company table {}", path.display()))
    }

    /// The website enricher, built on first use.
    pub fn enricher(&mut self) -> Result<&mut Enricher> {
        if self.enricher.is_none() {
            self.enricher = Some(Enricher::from_config(&self.config)?);
        }
        self.enricher
            .as_mut()
            .context("enricher was not initialized")
    }
}

/// Resolve configuration and dispatch the subcommand.
pub async fn run(cli: Cli) -> Result<()> {
    if cli.json {
        std::env::set_var("LEAD_FINDER_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("LEAD_FINDER_QUIET", "1");
    }

    let mut config = LeadFinderConfig::from_env()?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    let mut session = Session::new(config);

    match cli.command {
        Command::Query { filters, enrich } => query_cmd::run(&mut session, &filters, enrich).await,
        Command::Export {
            filters,
            format,
            out,
        } => export_cmd::run(&mut session, &filters, format, out.as_deref()),
        Command::Summary => summary_cmd::run(&mut session),
        Command::Enrich { urls } => enrich_cmd::run(&mut session, &urls).await,
    }
}
