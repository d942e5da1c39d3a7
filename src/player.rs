//! A player: one board plus the fleet placed on it.
//!
//! The player is the only place where ship and board mutators are called
//! together, so ship positions and board state stay in step.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::cell::Coord;
use crate::common::{AttackOutcome, BoardError, GuessResult};
use crate::ship::{Orientation, Ship, ShipSpec};

/// One attack fired by a player and what came of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub coord: Coord,
    pub outcome: AttackOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    board: Board,
    ships: Vec<Ship>,
    shots: Vec<Shot>,
}

impl Player {
    /// Create a player with an empty `rows × cols` board and an unplaced fleet.
    pub fn new(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
        fleet: &[ShipSpec],
    ) -> Result<Self, BoardError> {
        let board = Board::new(rows, cols)?;
        let ships = fleet
            .iter()
            .map(Ship::from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            board,
            ships,
            shots: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_index: usize) -> Result<&Ship, BoardError> {
        self.ships.get(ship_index).ok_or(BoardError::InvalidIndex)
    }

    /// Attacks this player has fired, oldest first.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Reorient an unplaced ship.
    pub fn set_ship_orientation(
        &mut self,
        ship_index: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.ships
            .get_mut(ship_index)
            .ok_or(BoardError::InvalidIndex)?
            .set_orientation(orientation)
    }

    /// Place a ship, anchored at `start`, using its current orientation.
    ///
    /// On failure the board and the ship are left unchanged.
    pub fn place_ship(&mut self, ship_index: usize, start: Coord) -> Result<(), BoardError> {
        let ship = self.ship(ship_index)?;
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let range = ship.range_on(&self.board, start)?;
        self.board.occupy_range(&range)?;
        self.ships[ship_index].place(&range)?;
        log::debug!(
            "{} placed {} at {} ({:?})",
            self.name,
            self.ships[ship_index].name(),
            start,
            self.ships[ship_index].orientation()
        );
        Ok(())
    }

    /// Set the ship's orientation, then place it at `start`.
    ///
    /// The orientation change sticks even if the placement itself fails.
    pub fn place_ship_as(
        &mut self,
        ship_index: usize,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.set_ship_orientation(ship_index, orientation)?;
        self.place_ship(ship_index, start)
    }

    /// Place every ship not yet on the board at a random free spot.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..self.ships.len() {
            if self.ships[i].is_placed() {
                continue;
            }
            let (start, orientation) = self.board.random_placement(rng, self.ships[i].length())?;
            self.place_ship_as(i, start, orientation)?;
        }
        Ok(())
    }

    /// `true` once every ship in the fleet has been placed.
    pub fn is_ready(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Resolve an opponent's attack on this player's board.
    ///
    /// A hit is attributed to the ship occupying `coord`; the result is
    /// `Sink` when that hit destroys it.
    pub fn receive_attack(&mut self, coord: Coord) -> Result<GuessResult, BoardError> {
        match self.board.attack_cell(coord)? {
            AttackOutcome::Miss => Ok(GuessResult::Miss),
            AttackOutcome::Hit => {
                let ship = self
                    .ships
                    .iter()
                    .find(|s| s.occupies(coord))
                    .ok_or(BoardError::UnknownShipHit {
                        row: coord.row,
                        col: coord.col,
                    })?;
                if ship.record_hit(coord, &self.board)? {
                    log::info!("{}'s {} was sunk", self.name, ship.name());
                    Ok(GuessResult::Sink(ship.name().to_string()))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
        }
    }

    /// Fire at `opponent` and report the full result.
    pub fn fire(&mut self, opponent: &mut Player, coord: Coord) -> Result<GuessResult, BoardError> {
        let result = opponent.receive_attack(coord)?;
        self.shots.push(Shot {
            coord,
            outcome: AttackOutcome::from(&result),
        });
        log::debug!("{} fired at {}: {:?}", self.name, coord, result);
        Ok(result)
    }

    /// Fire at `opponent`. Returns `true` on a hit.
    pub fn attack(&mut self, opponent: &mut Player, coord: Coord) -> Result<bool, BoardError> {
        self.fire(opponent, coord).map(|res| res.is_hit())
    }

    /// `true` if the ship at `ship_index` has every cell hit.
    pub fn is_ship_destroyed(&self, ship_index: usize) -> Result<bool, BoardError> {
        Ok(self.ship(ship_index)?.is_destroyed(&self.board))
    }

    /// Number of fleet ships not yet destroyed.
    pub fn remaining_ships(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| !s.is_destroyed(&self.board))
            .count()
    }

    pub fn has_remaining_ships(&self) -> bool {
        self.remaining_ships() > 0
    }
}
