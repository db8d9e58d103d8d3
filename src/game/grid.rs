//! # Level Grid
//!
//! The rectangular tile matrix a level is made of.

use crate::game::Position;
use crate::{GridwalkError, GridwalkResult};
use serde::{Deserialize, Serialize};

/// Kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Walkable floor
    Open,
    /// Impassable wall
    Wall,
}

impl TileKind {
    /// Maps a level text symbol to a tile kind.
    ///
    /// The spawn marker `@` is not a tile kind; the parser handles it.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(TileKind::Open),
            '#' => Some(TileKind::Wall),
            _ => None,
        }
    }

    /// The level text symbol for this tile kind.
    pub fn symbol(self) -> char {
        match self {
            TileKind::Open => '.',
            TileKind::Wall => '#',
        }
    }

    /// Returns true if an entity may stand on this tile.
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Open)
    }
}

/// A plain tile record handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub position: Position,
}

/// Rectangular matrix of tiles, stored row-major.
///
/// Every row has exactly `cols` tiles and there is at least one row and one
/// column. A grid is written once after parsing (when the spawn marker is
/// consumed) and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Builds a grid from equally long rows.
    ///
    /// Returns `None` if there are no rows, the rows are empty, or the rows
    /// differ in length.
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        Some(Self {
            rows: rows.len(),
            cols,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the tile kind at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk::{parse_level, Position, TileKind};
    ///
    /// let level = parse_level("#.@").unwrap();
    /// assert_eq!(level.grid.tile_at(Position::new(0, 0)).unwrap(), TileKind::Wall);
    /// assert!(level.grid.tile_at(Position::new(3, 0)).is_err());
    /// ```
    pub fn tile_at(&self, position: Position) -> GridwalkResult<TileKind> {
        self.index_of(position)
            .map(|index| self.tiles[index])
            .ok_or(GridwalkError::OutOfBounds {
                col: position.col,
                row: position.row,
                cols: self.cols,
                rows: self.rows,
            })
    }

    /// Returns true if the position is inside the grid and its tile is open.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile_at(position)
            .map(TileKind::is_walkable)
            .unwrap_or(false)
    }

    /// Overwrites one tile.
    pub fn set_tile(&mut self, position: Position, kind: TileKind) -> GridwalkResult<()> {
        let index = self.index_of(position).ok_or(GridwalkError::OutOfBounds {
            col: position.col,
            row: position.row,
            cols: self.cols,
            rows: self.rows,
        })?;
        self.tiles[index] = kind;
        Ok(())
    }

    /// Iterates over every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let cols = self.cols;
        self.tiles.iter().enumerate().map(move |(index, &kind)| Tile {
            kind,
            position: Position::new((index % cols) as i32, (index / cols) as i32),
        })
    }

    /// Renders the grid back to padded level text, one line per row.
    pub fn to_text(&self) -> String {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(|kind| kind.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        let col = usize::try_from(position.col).ok()?;
        let row = usize::try_from(position.row).ok()?;
        if col < self.cols && row < self.rows {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}
