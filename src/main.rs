use std::{fs::File, path::PathBuf};

use bank_account::{
    AccountPolicy, dlq::StdErrDLQ, engine::Engine, ingestion::CsvReader,
    output_repository::CsvOutput,
};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Replays a CSV script of account operations and prints the final accounts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with `op, holder, amount, target` rows
    path: PathBuf,

    /// Daily withdrawal limit applied to every opened account
    #[arg(long, env = "BANK_DAILY_LIMIT", default_value = "1000", value_parser = parse_exact)]
    daily_limit: Decimal,
}

/// Same exact parsing as script amounts: excess precision is an error, not rounded.
fn parse_exact(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(raw)
}

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = AccountPolicy::new(args.daily_limit)?;
    let file = File::open(&args.path)?;

    let mut engine = Engine::new(
        CsvReader::new(file),
        CsvOutput::stdout(),
        StdErrDLQ::default(),
        policy,
    );

    engine.process().await?;
    engine.flush()?;

    Ok(())
}
