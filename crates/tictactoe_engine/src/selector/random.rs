//! Uniformly random move choice.

use crate::board::Board;
use crate::types::Coord;
use rand::Rng;
use tracing::instrument;

/// Picks an empty square uniformly at random, or `None` on a full board.
///
/// Single pass reservoir sample: the k-th candidate replaces the held
/// choice with probability `1/k`.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Coord> {
    let mut chosen = None;
    for (seen, coord) in board.empty_cells().into_iter().enumerate() {
        if rng.random_range(0..=seen) == 0 {
            chosen = Some(coord);
        }
    }
    chosen
}
