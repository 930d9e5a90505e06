//! The 3x3 grid and its terminal-state evaluation.

use crate::error::InvalidMove;
use crate::types::{Cell, Coord, Outcome, Player};
use std::fmt;
use tracing::{instrument, trace};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Absolute line sum that means one side owns the whole line.
const WIN_SUM: i8 = SIZE as i8;

/// Every line that wins the game, in scan order: rows, columns, diagonals.
const LINES: [[(usize, usize); SIZE]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

const ROW_DIVIDER: &str = "---------";

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit contents, bypassing move validation.
    ///
    /// Meant for setting up positions; nothing checks that the position
    /// could be reached by alternating play.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Returns all squares, row by row.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Puts `player`'s mark on an empty square.
    ///
    /// Nothing else changes, on success or failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), InvalidMove> {
        match self.get(row, col) {
            None => Err(InvalidMove::OutOfBounds { row, col }),
            Some(cell) if !cell.is_empty() => Err(InvalidMove::Occupied { row, col }),
            Some(_) => {
                self.cells[row][col] = player.into();
                trace!("Mark placed");
                Ok(())
            }
        }
    }

    /// Empties a square. Used to take back exploratory moves during search.
    pub(crate) fn clear(&mut self, coord: Coord) {
        self.cells[coord.row][coord.col] = Cell::Empty;
    }

    /// Writes a mark without validation. `coord` must be on the board.
    pub(crate) fn set(&mut self, coord: Coord, player: Player) {
        self.cells[coord.row][coord.col] = player.into();
    }

    /// Coordinates of every empty square in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_empty())
                    .map(move |(col, _)| Coord::new(row, col))
            })
            .collect()
    }

    /// Checks if the board is full (all squares occupied).
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Decides whether the game is over and who won.
    ///
    /// Each line is summed with [`Cell::value`]; `+3` is a computer line and
    /// `-3` a human line. The first decisive line in scan order settles it.
    /// Without one, a full board is a draw.
    pub fn evaluate(&self) -> Outcome {
        for line in &LINES {
            let sum: i8 = line
                .iter()
                .map(|&(row, col)| self.cells[row][col].value())
                .sum();
            if sum == WIN_SUM {
                return Outcome::ComputerWins;
            }
            if sum == -WIN_SUM {
                return Outcome::HumanWins;
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Unfinished
        }
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().flatten().filter(|&&cell| cell == target).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "{}", ROW_DIVIDER)?;
            }
            let [a, b, c] = (*cells).map(Cell::glyph);
            writeln!(f, "{} | {} | {}", a, b, c)?;
        }
        Ok(())
    }
}
