//! # Game Module
//!
//! Core world representation and the rules that move the player around it.
//!
//! This module contains the fundamental building blocks of gridwalk:
//! - The tile grid and its bounds/walkability queries
//! - The player entity
//! - Movement resolution against the grid
//! - The session that owns the grid and the player for one run

pub mod entities;
pub mod grid;
pub mod movement;
pub mod state;

pub use entities::*;
pub use grid::*;
pub use movement::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// A cell coordinate in the level grid.
///
/// Coordinates are signed so that a step off the edge of the grid can be
/// represented and rejected by the bounds check instead of wrapping.
///
/// # Examples
///
/// ```
/// use gridwalk::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.col, 2);
/// assert_eq!(pos.row, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    /// Creates a new position with the given column and row.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the neighbouring position one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self + direction.to_delta()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.col + other.col, self.row + other.row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The four movement directions. There is no diagonal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to its unit position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk::{Direction, Position};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Position::new(0, -1));
    /// assert_eq!(Direction::Right.to_delta(), Position::new(1, 0));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.col, 5);
        assert_eq!(pos.row, 10);
        assert_eq!(Position::origin(), Position::new(0, 0));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(-3, 2);
        assert_eq!(pos1 + pos2, Position::new(2, 12));
    }

    #[test]
    fn test_direction_deltas_are_unit_steps() {
        for direction in Direction::all() {
            let delta = direction.to_delta();
            assert_eq!(delta.col.abs() + delta.row.abs(), 1, "{:?}", direction);
        }
        assert_eq!(Direction::Down.to_delta(), Position::new(0, 1));
        assert_eq!(Direction::Left.to_delta(), Position::new(-1, 0));
    }

    #[test]
    fn test_step_off_the_edge_goes_negative() {
        assert_eq!(Position::origin().step(Direction::Up), Position::new(0, -1));
        assert_eq!(Position::origin().step(Direction::Left), Position::new(-1, 0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 1).to_string(), "(2, 1)");
    }
}
