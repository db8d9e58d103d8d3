//! # Session State
//!
//! The session owns everything that exists for one run: the grid, the player
//! and a few counters. It is built once at startup from a parsed level and
//! handed by reference to the state machine and the renderer.

use crate::game::{move_position, Direction, Grid, MoveOutcome, Player, Position};
use crate::level::{place, Level};
use crate::GridwalkResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Counters describing what the player has done this run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Moves that changed the player's position
    pub steps_taken: u64,
    /// Moves that hit a wall or the grid edge
    pub blocked_moves: u64,
}

impl SessionStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one move attempt.
    pub fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Moved { .. } => self.steps_taken += 1,
            MoveOutcome::Blocked { .. } => self.blocked_moves += 1,
        }
    }
}

/// One run of the game: a grid and the player walking on it.
///
/// The grid is only reachable through `&Grid` once the session exists, so the
/// spawn clear done during construction is its last write.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    player: Player,
    statistics: SessionStatistics,
}

impl Session {
    /// Consumes the spawn marker of `level` and creates the player on it.
    ///
    /// # Errors
    ///
    /// Returns [`LevelFormatError::MissingSpawn`](crate::LevelFormatError::MissingSpawn)
    /// if the level has no `@`, or an out-of-bounds error for a spawn outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk::{parse_level, Position, Session};
    ///
    /// let level = parse_level("####\n#.@#\n####").unwrap();
    /// let session = Session::from_level(level).unwrap();
    /// assert_eq!(session.player().position(), Position::new(2, 1));
    /// ```
    pub fn from_level(mut level: Level) -> GridwalkResult<Self> {
        let spawn = place(&mut level)?;
        let (rows, cols) = level.grid.dimensions();
        info!(
            "Session started on a {}x{} grid, player at {}",
            cols, rows, spawn
        );

        Ok(Self {
            grid: level.grid,
            player: Player::new(spawn),
            statistics: SessionStatistics::new(),
        })
    }

    /// The level grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Counters for this run.
    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Tries to move the player one tile in `direction`.
    ///
    /// A blocked move leaves the player where it is; the outcome only tells
    /// the caller which of the two happened.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.player.position;
        let to = move_position(&self.grid, from, direction);
        self.player.position = to;

        let outcome = if to == from {
            MoveOutcome::Blocked { at: from }
        } else {
            MoveOutcome::Moved { from, to }
        };
        self.statistics.record(&outcome);
        debug!("Move {:?} from {}: {:?}", direction, from, outcome);
        outcome
    }

    /// Shorthand for the player's current position.
    pub fn player_position(&self) -> Position {
        self.player.position
    }
}
