//! # User Interface Elements
//!
//! One-line status HUD drawn over the scene.

use crate::rendering::Canvas;
use crate::{MovementPolicy, Scene};
use macroquad::color::Color;
use macroquad::math::vec2;

/// HUD text color
pub const HUD_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);

/// Distance of the HUD baseline from the bottom-left corner
const HUD_MARGIN: f32 = 8.0;

/// Describes the actor's state and the controls for the active policy.
pub fn status_line(scene: &Scene) -> String {
    let actor = scene.actor();
    let mut line = format!(
        "[{}] pos ({:.0}, {:.0})",
        scene.settings().policy,
        actor.bounds.x,
        actor.bounds.y
    );

    match scene.settings().policy {
        MovementPolicy::Heading => {
            line.push_str(&format!(" heading {:.0}", actor.angle));
            line.push_str("  arrows/WASD: turn+move");
        }
        MovementPolicy::AxisSeparated => {
            if actor.seeking_target {
                line.push_str(&format!(" -> ({:.0}, {:.0})", actor.target.x, actor.target.y));
            }
            line.push_str("  arrows/WASD: move, click: walk to");
        }
    }

    line.push_str(", ESC: quit");
    line
}

/// Draws the status line along the bottom edge of the canvas.
pub fn draw_hud(scene: &Scene, canvas: &mut impl Canvas) {
    let (_, height) = canvas.viewport();
    canvas.draw_text(
        &status_line(scene),
        vec2(HUD_MARGIN, height - HUD_MARGIN),
        HUD_COLOR,
    );
}
