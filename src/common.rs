//! Common types for the engine: errors and attack results.

use alloc::string::String;

use crate::cell::Coord;

/// Outcome of resolving one attack against a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell held part of a ship.
    Hit,
    /// The cell was open water.
    Miss,
}

/// Result of an attack as reported by the defending player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack missed all ships.
    Miss,
    /// Attack sank a ship, carrying its name.
    Sink(String),
}

impl GuessResult {
    /// `true` for `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

impl From<&GuessResult> for AttackOutcome {
    fn from(res: &GuessResult) -> Self {
        if res.is_hit() {
            AttackOutcome::Hit
        } else {
            AttackOutcome::Miss
        }
    }
}

/// Errors returned by board, ship and player operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board constructed with a zero dimension, or one whose cell count
    /// overflows `usize`.
    InvalidSize { rows: usize, cols: usize },
    /// Stored grid does not hold `rows * cols` cells.
    GridMismatch { expected: usize, actual: usize },
    /// Coordinate lies outside the board.
    OutOfRange { row: usize, col: usize },
    /// Requested cell range is empty or leaves the board.
    RangeOutOfBounds { start: Coord, count: usize },
    /// Ship length must be at least one cell.
    InvalidLength,
    /// Range overlaps a cell that is not open.
    Collision,
    /// Cell was already attacked.
    AlreadyAttacked { row: usize, col: usize },
    /// Hit attributed to a ship that does not occupy the cell.
    NotMyCell { row: usize, col: usize },
    /// Board reported a hit but no fleet ship occupies the cell.
    UnknownShipHit { row: usize, col: usize },
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place or reorient a ship that is already placed.
    ShipAlreadyPlaced,
    /// Random placement found no free range.
    UnableToPlaceShip,
}

impl BoardError {
    /// Matches both the single-coordinate and the range flavour of an
    /// out-of-bounds failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfRange { .. } | BoardError::RangeOutOfBounds { .. }
        )
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize { rows, cols } => write!(
                f,
                "Row and column size must be more than 0 and fit in memory (got {}x{})",
                rows, cols
            ),
            BoardError::GridMismatch { expected, actual } => write!(
                f,
                "Grid holds {} cells but the board needs {}",
                actual, expected
            ),
            BoardError::OutOfRange { row, col } => write!(f, "Cell[{}][{}] not found", row, col),
            BoardError::RangeOutOfBounds { start, count } => write!(
                f,
                "Range of {} cells from {} is out of bounds",
                count, start
            ),
            BoardError::InvalidLength => write!(f, "Ship length must be more than 0"),
            BoardError::Collision => write!(f, "Collision detected"),
            BoardError::AlreadyAttacked { row, col } => {
                write!(f, "Cell[{}][{}] was already attacked", row, col)
            }
            BoardError::NotMyCell { row, col } => {
                write!(f, "Cell[{}][{}] does not belong to this ship", row, col)
            }
            BoardError::UnknownShipHit { row, col } => {
                write!(f, "Hit at Cell[{}][{}] has no owning ship", row, col)
            }
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by game-level orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `start()` has not been called yet.
    NotStarted,
    /// A winner has already been decided.
    GameOver,
    /// Attacker and defender are the same player.
    SelfAttack,
    /// Failure reported by the board, a ship or a player.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "Game has not been started"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::SelfAttack => write!(f, "A player cannot attack itself"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
