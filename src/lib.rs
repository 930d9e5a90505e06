//! Terminal tic-tac-toe against a minimax opponent.
//!
//! The game logic lives in [`tictactoe_engine`]; this crate adds the
//! command line, the config file and the terminal game loop.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_bot::{GameConfig, play};
//! use tictactoe_engine::Difficulty;
//!
//! let mut bot = GameConfig::new(Difficulty::Hard, Some(1)).new_game();
//! let mut input = Cursor::new("2\n2\n");
//! let mut output = Vec::new();
//! // The script runs out before the game ends.
//! assert!(play(&mut bot, &mut input, &mut output).is_err());
//! assert_eq!(bot.turn(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use driver::play;
