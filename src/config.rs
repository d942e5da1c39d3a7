use alloc::vec::Vec;

use crate::common::BoardError;
use crate::ship::ShipSpec;

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Battleship length used by [`GameConfig::default`].
pub const DEFAULT_BATTLESHIP_LENGTH: usize = 3;

/// Default fleet as (name, length) pairs. The Battleship entry is replaced
/// by [`GameConfig::standard`].
pub const DEFAULT_FLEET: [(&str, usize); 4] = [
    ("Carrier", 5),
    ("Battleship", DEFAULT_BATTLESHIP_LENGTH),
    ("Submarine", 3),
    ("Patrol Boat", 2),
];

/// Board size and fleet composition for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Vec<ShipSpec>,
}

impl GameConfig {
    /// Build and validate a config.
    pub fn new(rows: usize, cols: usize, fleet: Vec<ShipSpec>) -> Result<Self, BoardError> {
        let config = Self { rows, cols, fleet };
        config.validate()?;
        Ok(config)
    }

    /// Default 10×10 board and fleet with a caller-chosen Battleship length.
    pub fn standard(battleship_length: usize) -> Self {
        let fleet = DEFAULT_FLEET
            .iter()
            .map(|&(name, length)| {
                let length = if name == "Battleship" {
                    battleship_length
                } else {
                    length
                };
                ShipSpec::new(name, length)
            })
            .collect();
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            fleet,
        }
    }

    /// Rejects zero or overflowing board dimensions, zero-length ships, and
    /// fleets with more ship cells than the board has.
    pub fn validate(&self) -> Result<(), BoardError> {
        let area = match self.rows.checked_mul(self.cols) {
            Some(area) if area > 0 => area,
            _ => {
                return Err(BoardError::InvalidSize {
                    rows: self.rows,
                    cols: self.cols,
                })
            }
        };
        if self.fleet.iter().any(|s| s.length() == 0) {
            return Err(BoardError::InvalidLength);
        }
        if self.total_ship_cells() > area {
            return Err(BoardError::UnableToPlaceShip);
        }
        Ok(())
    }

    /// Total number of ship cells in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet
            .iter()
            .map(ShipSpec::length)
            .fold(0, usize::saturating_add)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard(DEFAULT_BATTLESHIP_LENGTH)
    }
}
