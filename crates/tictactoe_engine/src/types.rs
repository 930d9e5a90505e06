//! Core domain types for tic-tac-toe.

/// One of the two sides that can put a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The engine. Drawn as `O`.
    Computer,
    /// The person at the terminal. Drawn as `X`.
    Human,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds the computer's mark.
    Computer,
    /// Holds the human's mark.
    Human,
}

impl Cell {
    /// Signed weight used when summing a line: computer +1, human -1, empty 0.
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Computer => 1,
            Cell::Human => -1,
        }
    }

    /// Glyph used when rendering the board.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Computer => 'O',
            Cell::Human => 'X',
        }
    }

    /// Returns true if nobody has played here.
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Computer => Cell::Computer,
            Player::Human => Cell::Human,
        }
    }
}

/// A square on the board, addressed by 0-indexed row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Coord {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Bounds are checked when it is placed, not here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of evaluating a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    Unfinished,
    /// The computer completed a line.
    ComputerWins,
    /// The human completed a line.
    HumanWins,
    /// The board is full and no line was completed.
    Draw,
}

impl Outcome {
    /// Returns true once no more moves should be played.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Unfinished
    }
}
