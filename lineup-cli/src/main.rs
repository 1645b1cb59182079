//! Lineup CLI - Command-line interface
//!
//! Runs the random search over the compiled-in Americano roster and
//! template, printing per-trial progress, the best candidate and its
//! round-by-round lineup.

mod search_cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use search_cmd::SearchArgs;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Find the most balanced Americano lineup by random search")]
struct Cli {
    /// Random seed for reproducible runs (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    search: SearchArgs,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the lineup output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    search_cmd::run(cli.search, cli.seed)
}
