//! Tic-tac-toe game logic with a minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation and outcome evaluation
//! - **Selector**: random, minimax and alternating move choice
//! - **Bot**: one game session tying a board to a selector
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, Outcome, TicTacToeBot};
//!
//! let mut bot = TicTacToeBot::with_seed(Difficulty::Hard, 7);
//! assert!(bot.apply_human_move(1, 1));
//! bot.computer_move();
//! assert_eq!(bot.current_outcome(), Outcome::Unfinished);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod bot;
mod error;
mod selector;
mod types;

pub use board::{Board, SIZE};
pub use bot::TicTacToeBot;
pub use error::InvalidMove;
pub use selector::{Difficulty, MoveSelector, Strategy, best_move, random_move};
pub use types::{Cell, Coord, Outcome, Player};
