//! Exhaustive minimax search for the computer's best move.

use crate::board::Board;
use crate::types::{Coord, Outcome, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of an immediate win. Each extra ply costs one point.
const WIN_SCORE: i32 = 10;

/// A mark placed for exploration. The square is emptied again on drop,
/// so every return path out of a search frame restores the board.
struct TrialMove<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> TrialMove<'a> {
    fn new(board: &'a mut Board, coord: Coord, player: Player) -> Self {
        board.set(coord, player);
        Self { board, coord }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.coord);
    }
}

/// Returns the move that maximizes the computer's outcome against a
/// perfect opponent, or `None` if the board has no empty square.
///
/// Candidates are scanned row-major and a later candidate only replaces the
/// current choice with a strictly higher score, so ties go to the first
/// square found. The board is borrowed mutably for exploration and is
/// identical to its input when this returns.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board) -> Option<Coord> {
    let mut best: Option<(Coord, i32)> = None;

    for coord in board.empty_cells() {
        let score = {
            let mut trial = TrialMove::new(board, coord, Player::Computer);
            minimax(&mut trial, 0, false)
        };
        debug!(%coord, score, "Scored candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }

    best.map(|(coord, _)| coord)
}

/// Scores `board` from the computer's point of view.
///
/// `depth` is the number of plies already played below the root move.
/// Wins are worth `10 - depth` and losses `-10 + depth`, so quicker wins
/// and slower losses rank higher among equal results.
fn minimax(board: &mut Board, depth: i32, maximize: bool) -> i32 {
    match board.evaluate() {
        Outcome::ComputerWins => return WIN_SCORE - depth,
        Outcome::HumanWins => return -WIN_SCORE + depth,
        Outcome::Draw => return 0,
        Outcome::Unfinished => {}
    }

    let (player, mut best) = if maximize {
        (Player::Computer, i32::MIN)
    } else {
        (Player::Human, i32::MAX)
    };

    for coord in board.empty_cells() {
        let mut trial = TrialMove::new(board, coord, player);
        let score = minimax(&mut trial, depth + 1, !maximize);
        best = if maximize {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
