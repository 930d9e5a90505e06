//! Computer move selection.
//!
//! Two strategies exist: a uniform random pick and an exhaustive minimax
//! search. [`Difficulty`] decides which one a [`MoveSelector`] uses on each
//! turn.

pub mod minimax;
pub mod random;

pub use minimax::best_move;
pub use random::random_move;

use crate::board::Board;
use crate::types::Coord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Every move is random.
    Easy,
    /// Odd-numbered computer moves are random, even-numbered ones optimal.
    Medium,
    /// Every move comes from minimax.
    #[default]
    Hard,
}

/// The algorithm used for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Strategy {
    /// Uniform choice among empty squares.
    Random,
    /// Full-depth minimax search.
    Minimax,
}

/// Chooses the computer's moves for one game.
///
/// The difficulty is fixed at construction. The turn counter advances once
/// per move chosen and only matters for [`Difficulty::Medium`].
#[derive(Debug, Clone)]
pub struct MoveSelector {
    difficulty: Difficulty,
    turn: u32,
    rng: StdRng,
}

impl MoveSelector {
    /// Creates a selector seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates a selector whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            turn: 0,
            rng,
        }
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of moves chosen so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The strategy the next call to [`select`](Self::select) will use.
    pub fn strategy(&self) -> Strategy {
        match self.difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Hard => Strategy::Minimax,
            Difficulty::Medium if self.turn % 2 == 0 => Strategy::Random,
            Difficulty::Medium => Strategy::Minimax,
        }
    }

    /// Chooses a move without applying it, and advances the turn counter.
    ///
    /// Returns `None` when the board has no empty square; the counter is
    /// left alone in that case. The board is only borrowed mutably for
    /// search and comes back unchanged.
    pub fn select(&mut self, board: &mut Board) -> Option<Coord> {
        let choice = self.choose(board)?;
        self.advance_turn();
        Some(choice)
    }

    /// Chooses a move for the current turn without advancing the counter.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty, turn = self.turn))]
    pub fn choose(&mut self, board: &mut Board) -> Option<Coord> {
        let strategy = self.strategy();
        let choice = match strategy {
            Strategy::Random => random_move(board, &mut self.rng),
            Strategy::Minimax => best_move(board),
        }?;

        debug!(%strategy, %choice, "Computer move selected");
        Some(choice)
    }

    /// Marks the current turn as played.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell::{Computer as O, Empty as E, Human as X};
    use std::str::FromStr;

    fn opening() -> Board {
        Board::from_cells([[X, E, E], [E, O, E], [E, E, X]])
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_fixed_strategies() {
        let mut board = opening();
        let mut easy = MoveSelector::with_seed(Difficulty::Easy, 1);
        let mut hard = MoveSelector::with_seed(Difficulty::Hard, 1);
        for _ in 0..3 {
            assert_eq!(easy.strategy(), Strategy::Random);
            assert_eq!(hard.strategy(), Strategy::Minimax);
            let before = board.clone();
            assert!(easy.select(&mut board).is_some());
            assert!(hard.select(&mut board).is_some());
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_medium_alternates() {
        let mut board = opening();
        let mut medium = MoveSelector::with_seed(Difficulty::Medium, 9);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(medium.strategy());
            medium.select(&mut board);
        }
        assert_eq!(
            seen,
            vec![
                Strategy::Random,
                Strategy::Minimax,
                Strategy::Random,
                Strategy::Minimax
            ]
        );
        assert_eq!(medium.turn(), 4);
    }

    #[test]
    fn test_choose_leaves_turn_alone() {
        let mut board = opening();
        let mut medium = MoveSelector::with_seed(Difficulty::Medium, 5);
        assert!(medium.choose(&mut board).is_some());
        assert_eq!(medium.turn(), 0);
        assert_eq!(medium.strategy(), Strategy::Random);

        medium.advance_turn();
        assert_eq!(medium.strategy(), Strategy::Minimax);
    }

    #[test]
    fn test_full_board_does_not_advance_turn() {
        let mut board = Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]);
        let mut selector = MoveSelector::with_seed(Difficulty::Easy, 2);
        assert_eq!(selector.select(&mut board), None);
        assert_eq!(selector.turn(), 0);
    }
}
