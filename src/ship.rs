//! Ship definitions and placement bookkeeping.
//!
//! A placed ship only remembers which coordinates belong to it. Cell state
//! (open, occupied, hit, miss) lives on the [`Board`], so a ship answers
//! damage questions by looking its coordinates up there.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::cell::{Cell, CellState, Coord};
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing column.
    #[default]
    Horizontal,
    /// Extends along increasing row.
    Vertical,
}

impl Orientation {
    /// Coordinate `offset` cells away from `start` along this axis, or `None`
    /// on arithmetic overflow.
    pub fn step(self, start: Coord, offset: usize) -> Option<Coord> {
        match self {
            Orientation::Horizontal => {
                let col = start.col.checked_add(offset)?;
                Some(Coord::new(start.row, col))
            }
            Orientation::Vertical => {
                let row = start.row.checked_add(offset)?;
                Some(Coord::new(row, start.col))
            }
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    name: String,
    length: usize,
}

impl ShipSpec {
    /// Create a new ship spec.
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship belonging to one player's fleet.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    name: String,
    length: usize,
    orientation: Orientation,
    position: Vec<Coord>,
}

impl Ship {
    /// Create an unplaced ship. Fails with `InvalidLength` for `length == 0`.
    pub fn new(
        name: impl Into<String>,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Self {
            name: name.into(),
            length,
            orientation,
            position: Vec::new(),
        })
    }

    /// Unplaced, horizontally oriented ship built from a fleet entry.
    pub fn from_spec(spec: &ShipSpec) -> Result<Self, BoardError> {
        Self::new(spec.name(), spec.length(), Orientation::Horizontal)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change orientation. Only allowed while the ship is unplaced.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        self.orientation = orientation;
        Ok(())
    }

    /// Cells this ship would cover on `board` when anchored at `start`.
    ///
    /// Any failure is the board's range failure, passed through as is.
    pub fn range_on(&self, board: &Board, start: Coord) -> Result<Vec<Cell>, BoardError> {
        board.cell_range(self.orientation, start, self.length)
    }

    /// Record `range` as this ship's position. Does not touch the board.
    pub fn place(&mut self, range: &[Cell]) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if range.len() != self.length {
            return Err(BoardError::InvalidLength);
        }
        self.position = range.iter().map(Cell::coord).collect();
        Ok(())
    }

    /// Coordinates occupied by this ship, empty while unplaced.
    pub fn position(&self) -> &[Coord] {
        &self.position
    }

    pub fn is_placed(&self) -> bool {
        !self.position.is_empty()
    }

    /// First coordinate of the ship, if placed.
    pub fn origin(&self) -> Option<Coord> {
        self.position.first().copied()
    }

    pub fn occupies(&self, coord: Coord) -> bool {
        self.position.contains(&coord)
    }

    /// Attribute a hit at `coord` to this ship.
    ///
    /// The board already holds the `Hit` state; this only checks ownership
    /// and reports whether the ship is now destroyed.
    pub fn record_hit(&self, coord: Coord, board: &Board) -> Result<bool, BoardError> {
        if !self.occupies(coord) {
            return Err(BoardError::NotMyCell {
                row: coord.row,
                col: coord.col,
            });
        }
        log::debug!("{} hit at {}", self.name, coord);
        Ok(self.is_destroyed(board))
    }

    /// Number of this ship's cells in state `Hit` on `board`.
    pub fn hits(&self, board: &Board) -> usize {
        self.position
            .iter()
            .filter(|&&c| board.is_cell_state(c, CellState::Hit).unwrap_or(false))
            .count()
    }

    /// `true` iff the ship is placed and every one of its cells is `Hit`.
    pub fn is_destroyed(&self, board: &Board) -> bool {
        self.is_placed() && self.hits(board) == self.length
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, orientation: {:?}, origin: {:?} }}",
            self.name,
            self.length,
            self.orientation,
            self.origin(),
        )
    }
}
