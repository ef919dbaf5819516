//! dayzmerge CLI - Command-line interface for DayZ server table maintenance

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "dayzmerge")]
#[command(about = "dayzmerge: merge mod XML tables into DayZ mission files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the dayzmerge CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
