//! # Display Management
//!
//! macroquad-backed [`Canvas`] used by the binary.

use crate::rendering::Canvas;
use crate::Bounds;
use macroquad::prelude::*;

/// Font size for HUD text, in pixels
pub const HUD_FONT_SIZE: f32 = 18.0;

/// Canvas drawing straight to macroquad's current frame.
pub struct MacroquadDisplay {
    /// Font size used by [`Canvas::draw_text`]
    pub font_size: f32,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    /// Creates a display with the default HUD font size.
    pub fn new() -> Self {
        Self {
            font_size: HUD_FONT_SIZE,
        }
    }
}

impl Canvas for MacroquadDisplay {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        draw_rectangle(bounds.x, bounds.y, bounds.width, bounds.height, color);
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        draw_triangle(a, b, c, color);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        macroquad::text::draw_text(text, position.x, position.y, self.font_size, color);
    }

    fn viewport(&self) -> (f32, f32) {
        (screen_width(), screen_height())
    }
}
