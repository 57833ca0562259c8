use clap::Parser;
use lead_finder_cli::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "lead_finder=debug,lead_finder_cli=debug"
    } else if cli.quiet {
        "lead_finder=warn,lead_finder_cli=warn"
    } else {
        "lead_finder=info,lead_finder_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    cli::run(cli).await
}
