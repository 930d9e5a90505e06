//! A single game between a human and the computer.

use crate::board::Board;
use crate::selector::{Difficulty, MoveSelector};
use crate::types::{Coord, Outcome, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe opponent owning the board for one game.
///
/// Whoever drives the game alternates [`apply_human_move`] and
/// [`computer_move`], polling [`current_outcome`] between turns.
///
/// [`apply_human_move`]: Self::apply_human_move
/// [`computer_move`]: Self::computer_move
/// [`current_outcome`]: Self::current_outcome
#[derive(Debug, Clone)]
pub struct TicTacToeBot {
    board: Board,
    selector: MoveSelector,
}

impl TicTacToeBot {
    /// Starts a game on an empty board.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_parts(Board::new(), MoveSelector::new(difficulty))
    }

    /// Starts a game whose random moves are reproducible.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_parts(Board::new(), MoveSelector::with_seed(difficulty, seed))
    }

    /// Resumes from an existing position.
    pub fn from_parts(board: Board, selector: MoveSelector) -> Self {
        Self { board, selector }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    /// Number of moves the computer has made.
    pub fn turn(&self) -> u32 {
        self.selector.turn()
    }

    /// Places the human's mark at a 0-indexed square.
    ///
    /// Returns `false` and leaves the board alone when the square is taken
    /// or off the board, so the caller can ask again.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> bool {
        match self.board.place(row, col, Player::Human) {
            Ok(()) => {
                debug!("Human move applied");
                true
            }
            Err(error) => {
                debug!(%error, "Human move rejected");
                false
            }
        }
    }

    /// Chooses and plays one computer move at the current difficulty.
    ///
    /// Returns the square played, or `None` if there was nowhere to play.
    #[instrument(skip(self), fields(difficulty = %self.difficulty()))]
    pub fn computer_move(&mut self) -> Option<Coord> {
        let coord = self.selector.choose(&mut self.board)?;
        let placed = self.board.place(coord.row, coord.col, Player::Computer);
        debug_assert!(placed.is_ok(), "selector chose an unplayable square");
        placed.ok()?;

        self.selector.advance_turn();
        info!(%coord, "Computer played");
        Some(coord)
    }

    /// Evaluates the board.
    pub fn current_outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Human-readable grid: `X` for the human, `O` for the computer.
    pub fn render_board(&self) -> String {
        self.board.to_string()
    }
}
