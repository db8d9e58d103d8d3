//! # Gridwalk
//!
//! A small tile-based level walker.
//!
//! ## Architecture Overview
//!
//! A level is described as plain text, one row per line. The crate turns that
//! text into a grid, puts the player on the spawn marker and then moves the
//! player one tile at a time:
//!
//! - **Level**: text parsing, file loading and spawn placement
//! - **Game**: the grid, positions, movement and the session that owns them
//! - **Scenes**: the Intro -> Playing -> Terminated state machine
//! - **Input / Rendering**: the macroquad window that feeds events in and draws
//!   the grid and player each frame
//!
//! Everything except `input` polling and `rendering` is window-free and can be
//! driven directly from tests.

pub mod game;
pub mod input;
pub mod level;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use input::*;
pub use level::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for gridwalk.
#[derive(thiserror::Error, Debug)]
pub enum GridwalkError {
    /// The level could not be loaded or parsed
    #[error("Level format error: {0}")]
    LevelFormat(#[from] LevelFormatError),

    /// A grid query fell outside the grid
    #[error("Position ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: i32,
        row: i32,
        cols: usize,
        rows: usize,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the gridwalk codebase.
pub type GridwalkResult<T> = Result<T, GridwalkError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Window title
    pub const WINDOW_TITLE: &str = "Platformer Game";

    /// Window width in pixels
    pub const WINDOW_WIDTH: i32 = 500;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: i32 = 500;

    /// Default edge length of one grid cell in pixels
    pub const DEFAULT_TILE_SIZE: f32 = 50.0;

    /// Player sprite offset inside its cell, measured at the default tile size
    pub const PLAYER_SPRITE_OFFSET: (f32, f32) = (15.0, 5.0);

    /// Player sprite size, measured at the default tile size
    pub const PLAYER_SPRITE_SIZE: (f32, f32) = (20.0, 40.0);

    /// Directory level names are resolved against
    pub const DEFAULT_DATA_DIR: &str = "data";

    /// Lines shown on the intro screen
    pub const INTRO_TEXT: [&str; 3] = [
        "Welcome to the game!",
        "",
        "Use the arrow keys to move.",
    ];
}
