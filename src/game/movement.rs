//! # Movement
//!
//! Resolves a single directional step against the grid.
//!
//! A step that would leave the grid or enter a wall is a no-op: the position
//! comes back unchanged and nothing is reported as an error.

use crate::game::{Direction, Grid, Position};

/// Moves one tile from `position` in `direction` if the target is walkable.
///
/// Returns the new position, or `position` itself when the step is blocked.
///
/// # Examples
///
/// ```
/// use gridwalk::{move_position, parse_level, Direction, Position};
///
/// let level = parse_level("####\n#.@#\n####").unwrap();
/// let start = Position::new(2, 1);
///
/// let moved = move_position(&level.grid, start, Direction::Left);
/// assert_eq!(moved, Position::new(1, 1));
///
/// // Wall at (0, 1)
/// assert_eq!(move_position(&level.grid, moved, Direction::Left), moved);
/// ```
pub fn move_position(grid: &Grid, position: Position, direction: Direction) -> Position {
    let candidate = position.step(direction);
    if grid.is_walkable(candidate) {
        candidate
    } else {
        position
    }
}

/// What happened when the player tried to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto a new tile
    Moved { from: Position, to: Position },
    /// The step was blocked by a wall or the grid edge
    Blocked { at: Position },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileKind;

    fn corridor() -> Grid {
        use TileKind::{Open, Wall};
        // .#.
        // ...
        Grid::from_rows(vec![vec![Open, Wall, Open], vec![Open, Open, Open]]).unwrap()
    }

    #[test]
    fn test_move_onto_open_tile() {
        let grid = corridor();
        assert_eq!(
            move_position(&grid, Position::new(0, 1), Direction::Right),
            Position::new(1, 1)
        );
        assert_eq!(
            move_position(&grid, Position::new(0, 1), Direction::Up),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_wall_blocks_move() {
        let grid = corridor();
        let start = Position::new(1, 1);
        assert_eq!(move_position(&grid, start, Direction::Up), start);
    }

    #[test]
    fn test_edges_block_move() {
        let grid = corridor();
        assert_eq!(
            move_position(&grid, Position::new(0, 0), Direction::Up),
            Position::new(0, 0)
        );
        assert_eq!(
            move_position(&grid, Position::new(0, 0), Direction::Left),
            Position::new(0, 0)
        );
        assert_eq!(
            move_position(&grid, Position::new(2, 1), Direction::Down),
            Position::new(2, 1)
        );
        assert_eq!(
            move_position(&grid, Position::new(2, 1), Direction::Right),
            Position::new(2, 1)
        );
    }
}
