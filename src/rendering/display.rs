//! # Display Management
//!
//! Grid and player rendering using macroquad.

use crate::config;
use crate::game::{Position, Session, TileKind};
use crate::rendering::IntroScreen;
use macroquad::prelude::*;

/// Top-left pixel corner of a grid cell.
pub fn cell_origin(position: Position, tile_size: f32) -> (f32, f32) {
    (
        position.col as f32 * tile_size,
        position.row as f32 * tile_size,
    )
}

/// Scale factor between `tile_size` and the default tile size.
fn tile_scale(tile_size: f32) -> f32 {
    tile_size / config::DEFAULT_TILE_SIZE
}

/// Top-left pixel corner of the player sprite standing on `position`.
///
/// # Examples
///
/// ```
/// use gridwalk::{sprite_origin, Position};
///
/// assert_eq!(sprite_origin(Position::new(2, 1), 50.0), (115.0, 55.0));
/// ```
pub fn sprite_origin(position: Position, tile_size: f32) -> (f32, f32) {
    let (x, y) = cell_origin(position, tile_size);
    let (offset_x, offset_y) = config::PLAYER_SPRITE_OFFSET;
    let scale = tile_scale(tile_size);
    (x + offset_x * scale, y + offset_y * scale)
}

/// Width and height of the player sprite.
pub fn sprite_size(tile_size: f32) -> (f32, f32) {
    let (width, height) = config::PLAYER_SPRITE_SIZE;
    let scale = tile_scale(tile_size);
    (width * scale, height * scale)
}

/// Fill colour for a tile kind.
pub fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Open => Color::from_rgba(106, 168, 79, 255),
        TileKind::Wall => Color::from_rgba(139, 94, 52, 255),
    }
}

/// Macroquad display manager.
pub struct MacroquadDisplay {
    /// Tile size in pixels
    pub tile_size: f32,
    /// Colour of the player sprite
    pub player_color: Color,
    /// Banner shown before play starts
    pub intro: IntroScreen,
}

impl MacroquadDisplay {
    /// Creates a display that draws cells `tile_size` pixels wide.
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            player_color: Color::from_rgba(200, 40, 40, 255),
            intro: IntroScreen::default(),
        }
    }

    /// Renders the intro banner.
    pub fn render_intro(&self) {
        self.intro.render();
    }

    /// Renders the grid and the player.
    pub fn render_game(&self, session: &Session) {
        clear_background(WHITE);

        for tile in session.grid().tiles() {
            let (x, y) = cell_origin(tile.position, self.tile_size);
            draw_rectangle(x, y, self.tile_size, self.tile_size, tile_color(tile.kind));
            draw_rectangle_lines(
                x,
                y,
                self.tile_size,
                self.tile_size,
                1.0,
                Color::new(0.0, 0.0, 0.0, 0.2),
            );
        }

        let (x, y) = sprite_origin(session.player_position(), self.tile_size);
        let (width, height) = sprite_size(self.tile_size);
        draw_rectangle(x, y, width, height, self.player_color);
    }
}
