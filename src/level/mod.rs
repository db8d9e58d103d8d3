//! # Level Module
//!
//! Turning level text into a grid and placing the player on it.
//!
//! Level text has one row per line over the symbols `.` (open), `#` (wall)
//! and `@` (spawn marker). Shorter lines are padded with `.` so the grid is
//! always rectangular.

pub mod parser;
pub mod placement;

pub use parser::*;
pub use placement::*;

use crate::game::{Grid, Position};
use std::path::PathBuf;

/// Reasons a level cannot be used to start a run. All of them are fatal.
#[derive(thiserror::Error, Debug)]
pub enum LevelFormatError {
    /// The level text has no lines at all
    #[error("level has no rows")]
    NoRows,

    /// Every line of the level text is blank
    #[error("level has no columns")]
    NoColumns,

    /// A symbol other than `.`, `#` or `@`
    #[error("unknown symbol {symbol:?} at column {col}, row {row}")]
    UnknownSymbol { symbol: char, col: usize, row: usize },

    /// No `@` marker, so there is nowhere to put the player
    #[error("level has no spawn marker '@'")]
    MissingSpawn,

    /// The level file does not exist
    #[error("level file '{}' not found", .path.display())]
    Missing { path: PathBuf },

    /// The level file exists but could not be read
    #[error("could not read level file '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed level: the grid plus where the player starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// The tile grid, with the spawn cell already stored as open
    pub grid: Grid,
    /// Position of the last `@` in row-major order, if any
    pub spawn: Option<Position>,
    /// How many `@` markers the text contained
    pub spawn_markers: usize,
}
