//! # Rendering Module
//!
//! Draws the intro banner, the grid and the player with macroquad.
//!
//! The renderer only reads the session; it never changes game state.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
