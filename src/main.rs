//! tictactoe_bot - play tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_bot::{Cli, GameConfig, play};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load(&cli.config)?.with_overrides(cli.difficulty, cli.seed);
    info!(difficulty = %config.difficulty(), seed = ?config.seed(), "Starting game");

    let mut bot = config.new_game();
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    play(&mut bot, &mut input, &mut output)?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
