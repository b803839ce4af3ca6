//! # Rendering Module
//!
//! Drawing a scene onto any [`Canvas`]. Nothing here feeds back into the
//! simulation.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use crate::{Actor, Bounds, MovementPolicy, Scene};
use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};

/// Screen clear color
pub const BACKGROUND_COLOR: Color = Color::new(10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0, 1.0);

/// Actor fill color
pub const ACTOR_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Target marker color
pub const TARGET_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.6);

/// Size of the target marker in pixels
pub const TARGET_MARKER_SIZE: f32 = 6.0;

/// A surface that can draw solid shapes and text.
pub trait Canvas {
    /// Fills the whole surface.
    fn clear(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Fills a triangle.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Draws a line of text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Returns the drawable size in pixels.
    fn viewport(&self) -> (f32, f32);
}

/// Draws the complete scene: background, obstacles, actor, target, HUD.
pub fn render_scene(scene: &Scene, canvas: &mut impl Canvas) {
    canvas.clear(BACKGROUND_COLOR);

    for obstacle in scene.obstacles() {
        canvas.fill_rect(*obstacle.bounds(), obstacle.color());
    }

    let actor = scene.actor();
    match scene.settings().policy {
        MovementPolicy::Heading => {
            let [a, b, c] = actor_triangle(actor);
            canvas.fill_triangle(a, b, c, ACTOR_COLOR);
        }
        MovementPolicy::AxisSeparated => canvas.fill_rect(actor.bounds, ACTOR_COLOR),
    }

    if actor.seeking_target {
        let half = TARGET_MARKER_SIZE / 2.0;
        let marker = Bounds::new(
            actor.target.x - half,
            actor.target.y - half,
            TARGET_MARKER_SIZE,
            TARGET_MARKER_SIZE,
        );
        canvas.fill_rect(marker, TARGET_COLOR);
    }

    draw_hud(scene, canvas);
}

/// Triangle inscribed in the actor's rectangle, tip along the heading.
///
/// Returns the tip followed by the two rear corners.
pub fn actor_triangle(actor: &Actor) -> [Vec2; 3] {
    let center = actor.bounds.center();
    let forward = actor.heading();
    let side = vec2(-forward.y, forward.x);
    let half_length = actor.bounds.width.min(actor.bounds.height) / 2.0;

    let tip = center + forward * half_length;
    let rear = center - forward * half_length;
    [
        tip,
        rear + side * half_length,
        rear - side * half_length,
    ]
}
