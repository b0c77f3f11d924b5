use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_cli::commands::{LoanCommand, TaxCommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal finance calculator.
///
/// Estimates 2024 US income and payroll tax, and builds fixed-rate loan
/// amortization schedules.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Tax(TaxCommand),
    Loan(LoanCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so reports are not interleaved with log lines.
/// * Writes to stderr, keeping stdout for the report itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let output = match &cli.command {
        Command::Tax(cmd) => cmd.run()?,
        Command::Loan(cmd) => cmd.run()?,
    };
    print!("{output}");

    Ok(())
}
