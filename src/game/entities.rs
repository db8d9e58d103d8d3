//! # Entities
//!
//! The controllable player. There is exactly one per run.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// The player entity. Its position is the only state that changes during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
}

impl Player {
    /// Creates a player standing at `position`.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Current position of the player.
    pub fn position(&self) -> Position {
        self.position
    }
}
