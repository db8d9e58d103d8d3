//! # Entity Placement
//!
//! Consumes the spawn marker and yields the player's first position.

use crate::game::{Position, TileKind};
use crate::level::{Level, LevelFormatError};
use crate::GridwalkResult;

/// Clears the spawn cell to open and returns the spawn position.
///
/// The spawn cell is already open after parsing; writing it again marks the
/// marker as consumed.
///
/// # Errors
///
/// Returns [`LevelFormatError::MissingSpawn`] when the level had no `@`, and
/// [`GridwalkError::OutOfBounds`](crate::GridwalkError::OutOfBounds) when the
/// recorded spawn lies outside the grid.
pub fn place(level: &mut Level) -> GridwalkResult<Position> {
    let spawn = level.spawn.ok_or(LevelFormatError::MissingSpawn)?;
    level.grid.set_tile(spawn, TileKind::Open)?;
    Ok(spawn)
}
