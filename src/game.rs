//! Two-player game orchestration.
//!
//! [`Battleship`] owns both players, delegates placement and attacks to
//! them, and decides the winner. Turn order is left to the caller.

use rand::Rng;

use crate::cell::Coord;
use crate::common::{GameError, GuessResult};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;

/// Identifies one of the two players of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// `start()` has not been called.
    NotStarted,
    /// At least one player still has unplaced ships.
    Placing,
    /// Both fleets placed and no winner yet.
    InProgress,
    /// A winner has been decided.
    Finished(PlayerId),
}

/// Core game logic holding both players and the winner, once known.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Battleship {
    config: GameConfig,
    players: Option<[Player; 2]>,
    winner: Option<PlayerId>,
}

impl Battleship {
    /// Create a game for `config`. Players exist only after [`start`](Self::start).
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            players: None,
            winner: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create two fresh players, discarding any previous game state.
    pub fn start(&mut self) -> Result<(), GameError> {
        let make = |name: &str| {
            Player::new(name, self.config.rows, self.config.cols, &self.config.fleet)
        };
        let players = [make("Player 1")?, make("Player 2")?];
        self.players = Some(players);
        self.winner = None;
        log::info!(
            "game started on a {}x{} board with {} ships each",
            self.config.rows,
            self.config.cols,
            self.config.fleet.len()
        );
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        let players = self.players.as_ref().ok_or(GameError::NotStarted)?;
        Ok(&players[id.index()])
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        let players = self.players.as_mut().ok_or(GameError::NotStarted)?;
        Ok(&mut players[id.index()])
    }

    /// Place one of `player`'s ships at `start` using its current orientation.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        ship_index: usize,
        start: Coord,
    ) -> Result<(), GameError> {
        self.player_mut(player)?.place_ship(ship_index, start)?;
        Ok(())
    }

    /// Place one of `player`'s ships at `start` with the given orientation.
    pub fn place_ship_as(
        &mut self,
        player: PlayerId,
        ship_index: usize,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.player_mut(player)?
            .place_ship_as(ship_index, start, orientation)?;
        Ok(())
    }

    /// Place all of `player`'s remaining ships at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.player_mut(player)?.place_fleet_randomly(rng)?;
        Ok(())
    }

    /// `attacker` fires at `defender`'s board. Returns the full result and
    /// re-evaluates the winner.
    pub fn fire(
        &mut self,
        attacker: PlayerId,
        defender: PlayerId,
        coord: Coord,
    ) -> Result<GuessResult, GameError> {
        if attacker == defender {
            return Err(GameError::SelfAttack);
        }
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let [one, two] = self.players.as_mut().ok_or(GameError::NotStarted)?;
        let (att, def) = match attacker {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let result = att.fire(def, coord)?;
        self.check_winner();
        Ok(result)
    }

    /// `attacker` fires at `defender`'s board. Returns `true` on a hit.
    pub fn attack_player(
        &mut self,
        attacker: PlayerId,
        defender: PlayerId,
        coord: Coord,
    ) -> Result<bool, GameError> {
        self.fire(attacker, defender, coord).map(|res| res.is_hit())
    }

    /// Decide the winner: the opponent of the first player left with no
    /// ships afloat. Once decided, the winner never changes.
    pub fn check_winner(&mut self) -> Option<PlayerId> {
        if self.winner.is_some() {
            return self.winner;
        }
        let players = self.players.as_ref()?;
        let loser = [PlayerId::One, PlayerId::Two]
            .into_iter()
            .find(|id| !players[id.index()].has_remaining_ships())?;
        let winner = loser.other();
        log::info!("{} wins", players[winner.index()].name());
        self.winner = Some(winner);
        self.winner
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match (&self.players, self.winner) {
            (None, _) => GameStatus::NotStarted,
            (Some(_), Some(w)) => GameStatus::Finished(w),
            (Some(players), None) if players.iter().all(Player::is_ready) => {
                GameStatus::InProgress
            }
            (Some(_), None) => GameStatus::Placing,
        }
    }
}
