//! # Collision Test
//!
//! Overlap testing between axis-aligned rectangles.

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// # Examples
///
/// ```
/// use sidestep::Bounds;
///
/// let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
/// let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
/// assert!(a.overlaps(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner.
    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Returns the center point.
    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the rectangle has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns a copy moved to the given top-left corner.
    pub fn at(self, position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    /// Returns true if this rectangle overlaps `other`.
    ///
    /// See [`overlaps`].
    pub fn overlaps(&self, other: &Bounds) -> bool {
        overlaps(self, other)
    }
}

/// Returns true if the interiors of two rectangles overlap.
///
/// Touching edges do not count, and a rectangle with zero width or height
/// never overlaps anything.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }

    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
