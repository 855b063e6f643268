//! Tabletop - unified CLI.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tabletop::{Calculation, Cli, Command, Console, ConsoleConfig, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, padding } => run_play(&config, padding),
        Command::Calc { lhs, operator, rhs } => run_calc(&lhs, &operator, &rhs),
    }
}

/// Run the interactive tic-tac-toe session.
fn run_play(config_path: &Path, padding: Option<usize>) -> Result<ExitCode> {
    let config = ConsoleConfig::load_or_default(config_path)?.with_padding(padding);
    initialize_tracing(config.log_filter());
    info!(?config, "Starting tic-tac-toe");

    let console = Console::stdio(*config.padding());
    let summary = Orchestrator::new(console).run()?;
    info!(rounds = summary.rounds(), "Goodbye");

    Ok(ExitCode::SUCCESS)
}

/// Evaluate a single calculator expression.
fn run_calc(lhs: &str, operator: &str, rhs: &str) -> Result<ExitCode> {
    initialize_tracing("warn");

    match Calculation::parse(lhs, operator, rhs).and_then(|calc| calc.render()) {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr so prompts and the board own stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
