//! Command-line interface for tictactoe_duel.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with labels, colors and log filter
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs (the terminal is taken by the game)
    #[arg(long, default_value = "tictactoe_duel.log")]
    pub log_file: PathBuf,

    /// Seed for the computer's choices, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}
