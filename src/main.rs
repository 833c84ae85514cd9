//! Tic-tac-toe duel - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_duel::{DuelConfig, RandomPlayer, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DuelConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DuelConfig::default(),
    };

    initialize_tracing(&cli, &config)?;
    info!(seed = ?cli.seed, "Starting tictactoe_duel");

    let computer_label = config.computer_label().clone();
    let computer = match cli.seed {
        Some(seed) => RandomPlayer::seeded(computer_label, seed),
        None => RandomPlayer::from_entropy(computer_label),
    };

    run_tui(config, computer)
}

/// Logs go to a file so they don't interfere with the TUI.
fn initialize_tracing(cli: &Cli, config: &DuelConfig) -> Result<()> {
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
