//! Grid coordinates and per-cell state.

use core::fmt;

/// State of a single board cell.
///
/// Transitions only move forward: `Open -> Occupied -> Hit` or
/// `Open -> Miss`. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Occupied,
    Hit,
    Miss,
}

impl CellState {
    /// `true` once the cell has been attacked.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// A (row, col) position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Snapshot of one board cell: where it is and what state it held when read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

impl Cell {
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}
