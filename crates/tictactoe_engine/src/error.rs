//! Move validation errors.

use derive_more::{Display, Error};

/// A placement the board refused.
///
/// This is the only failure the engine knows about. Callers that drive a
/// game from user input treat it as "ask again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum InvalidMove {
    /// The target square already holds a mark.
    #[display("Square ({}, {}) is already occupied", row, col)]
    Occupied {
        /// Row of the rejected square (0-2).
        row: usize,
        /// Column of the rejected square (0-2).
        col: usize,
    },

    /// The coordinates fall outside the 3x3 grid.
    #[display("Square ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
