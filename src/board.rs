//! Game board: the single source of truth for cell state.
//!
//! All geometry (bounds, ranges) and collision checks happen here. Ships and
//! players only hold coordinates and ask the board what is at them.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::cell::{Cell, CellState, Coord};
use crate::common::{AttackOutcome, BoardError};
use crate::ship::Orientation;

/// Attempts made by [`Board::random_placement`] before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// A `rows × cols` grid of cell states, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "BoardRepr"))]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<CellState>,
}

/// Wire shape of a [`Board`]; checked by `TryFrom` before it becomes one.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    grid: Vec<CellState>,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let mut board = Board::new(repr.rows, repr.cols)?;
        if repr.grid.len() != board.grid.len() {
            return Err(BoardError::GridMismatch {
                expected: board.grid.len(),
                actual: repr.grid.len(),
            });
        }
        board.grid = repr.grid;
        Ok(board)
    }
}

impl Board {
    /// Create a board with every cell `Open`. Both dimensions must be
    /// non-zero and their product must fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidSize { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let len = rows.checked_mul(cols).ok_or(invalid)?;
        Ok(Board {
            rows,
            cols,
            grid: vec![CellState::Open; len],
        })
    }

    /// Board's total number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board's total number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfRange {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(coord.row * self.cols + coord.col)
    }

    /// The cell at `coord` with its current state.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        let state = self.cell_state(coord)?;
        Ok(Cell {
            row: coord.row,
            col: coord.col,
            state,
        })
    }

    pub fn cell_state(&self, coord: Coord) -> Result<CellState, BoardError> {
        let idx = self.index(coord)?;
        Ok(self.grid[idx])
    }

    pub fn is_cell_state(&self, coord: Coord, state: CellState) -> Result<bool, BoardError> {
        Ok(self.cell_state(coord)? == state)
    }

    /// Rows of the grid, top to bottom.
    pub fn grid(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.grid.chunks(self.cols)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.iter().enumerate().map(move |(i, &state)| Cell {
            row: i / self.cols,
            col: i % self.cols,
            state,
        })
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.grid.iter().filter(|&&s| s == state).count()
    }

    /// The `count` cells starting at `start` and extending along `orientation`.
    ///
    /// Cells carry their current state but nothing is committed. Fails if
    /// `start` is off the board, if `count` is zero, or if the range runs
    /// past the edge.
    pub fn cell_range(
        &self,
        orientation: Orientation,
        start: Coord,
        count: usize,
    ) -> Result<Vec<Cell>, BoardError> {
        self.index(start)?;
        let out_of_bounds = BoardError::RangeOutOfBounds { start, count };
        if count == 0 {
            return Err(out_of_bounds);
        }
        match orientation.step(start, count - 1) {
            Some(last) if self.contains(last) => {}
            _ => return Err(out_of_bounds),
        }

        (0..count)
            .map(|offset| {
                let coord = orientation
                    .step(start, offset)
                    .ok_or_else(|| out_of_bounds.clone())?;
                self.cell(coord)
            })
            .collect()
    }

    /// `true` if any cell of `range` is not currently `Open`.
    ///
    /// State is read from the board, not from the snapshot carried by the
    /// cells. Cells off the board count as a collision.
    pub fn has_collision(&self, range: &[Cell]) -> bool {
        range
            .iter()
            .any(|c| self.cell_state(c.coord()) != Ok(CellState::Open))
    }

    /// Mark every cell of `range` as `Occupied`. Either all cells commit or
    /// none do.
    pub fn occupy_range(&mut self, range: &[Cell]) -> Result<(), BoardError> {
        let indices = range
            .iter()
            .map(|c| self.index(c.coord()))
            .collect::<Result<Vec<_>, _>>()?;
        if self.has_collision(range) {
            return Err(BoardError::Collision);
        }
        for idx in indices {
            self.grid[idx] = CellState::Occupied;
        }
        Ok(())
    }

    /// Resolve an attack on `coord`.
    ///
    /// `Occupied` becomes `Hit`, `Open` becomes `Miss`. Cells already hit or
    /// missed are left untouched and the attack fails.
    pub fn attack_cell(&mut self, coord: Coord) -> Result<AttackOutcome, BoardError> {
        let idx = self.index(coord)?;
        let (next, outcome) = match self.grid[idx] {
            CellState::Occupied => (CellState::Hit, AttackOutcome::Hit),
            CellState::Open => (CellState::Miss, AttackOutcome::Miss),
            CellState::Hit | CellState::Miss => {
                return Err(BoardError::AlreadyAttacked {
                    row: coord.row,
                    col: coord.col,
                })
            }
        };
        self.grid[idx] = next;
        log::debug!("attack at {} -> {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Returns a random collision-free start and orientation for a ship of
    /// `length` cells.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        let axis_len = |orient: Orientation| match orient {
            Orientation::Horizontal => self.cols,
            Orientation::Vertical => self.rows,
        };
        for _ in 0..PLACEMENT_ATTEMPTS {
            let mut orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // a ship too long for one axis may still fit along the other
            if axis_len(orient) < length {
                orient = orient.flip();
            }
            let Some(slack) = axis_len(orient).checked_sub(length) else {
                break;
            };
            let cross_len = axis_len(orient.flip());
            let along = rng.random_range(0..=slack);
            let across = rng.random_range(0..cross_len);
            let start = match orient {
                Orientation::Horizontal => Coord::new(across, along),
                Orientation::Vertical => Coord::new(along, across),
            };
            let range = self.cell_range(orient, start, length)?;
            if !self.has_collision(&range) {
                return Ok((start, orient));
            }
        }
        log::warn!(
            "no free {}-cell range found after {} attempts",
            length,
            PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip)
    }
}
