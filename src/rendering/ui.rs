//! # User Interface Elements
//!
//! The intro banner.

use crate::config;
use macroquad::prelude::*;

/// Text banner shown while the state machine is in the intro.
#[derive(Debug, Clone)]
pub struct IntroScreen {
    pub lines: Vec<String>,
    pub font_size: f32,
    /// Vertical position of the first line
    pub top: f32,
    pub left: f32,
}

impl Default for IntroScreen {
    fn default() -> Self {
        Self {
            lines: config::INTRO_TEXT.iter().map(|line| line.to_string()).collect(),
            font_size: 30.0,
            top: 50.0,
            left: 10.0,
        }
    }
}

impl IntroScreen {
    /// Baselines of each banner line, top to bottom.
    pub fn line_positions(&self) -> Vec<f32> {
        let spacing = 10.0;
        let mut y = self.top;
        self.lines
            .iter()
            .map(|_| {
                y += spacing + self.font_size;
                y
            })
            .collect()
    }

    /// Draws the banner over a plain background.
    pub fn render(&self) {
        clear_background(LIGHTGRAY);
        for (line, y) in self.lines.iter().zip(self.line_positions()) {
            draw_text(line, self.left, y, self.font_size, BLACK);
        }
    }
}
