use std::path::PathBuf;

use account_ledger::{replay::replay, Ledger};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replays an operations CSV against a fresh ledger.
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// CSV file with `type,account,amount` rows.
    #[clap(value_parser)]
    input: PathBuf,

    /// Print one result row per operation instead of the final balances.
    #[clap(long, action)]
    outcomes: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[clap(long, value_parser, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries the CSV output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    let mut ledger = Ledger::new();
    let summary = replay(file, std::io::stdout(), &mut ledger, args.outcomes)
        .with_context(|| format!("failed to replay {}", args.input.display()))?;

    info!(
        accounts = ledger.len(),
        applied = summary.applied,
        rejected = summary.rejected,
        "replay finished"
    );

    Ok(())
}
