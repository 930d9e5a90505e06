//! Command-line interface for tictactoe_bot.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Difficulty;

/// Play tic-tac-toe against the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent strength: easy, medium or hard (overrides the config file)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the opponent's random moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,
}
