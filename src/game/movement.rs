//! # Movement Resolution
//!
//! Movement policies and the test-then-revert discipline they share.
//!
//! Every policy works the same way: apply a candidate move, test the actor's
//! new rectangle against every obstacle, and undo the move on overlap. The
//! policies differ only in how much they undo.

use crate::{step_toward, Actor, Axis, Bounds, FrameInput, Obstacle, SidestepError, SidestepResult};
use log::debug;
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How keyboard input turns into movement and how collisions are undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovementPolicy {
    /// Arrow keys move each axis independently; each axis is tested and
    /// reverted on its own, X before Y. A pointer click sets a target the
    /// actor then walks toward.
    #[default]
    #[serde(alias = "axis")]
    AxisSeparated,
    /// Left/right rotate the heading, up/down move along it. The combined
    /// move is tested once and fully reverted on any overlap.
    Heading,
}

impl MovementPolicy {
    /// Returns the name used on the command line and in layout files.
    pub fn name(self) -> &'static str {
        match self {
            MovementPolicy::AxisSeparated => "axis-separated",
            MovementPolicy::Heading => "heading",
        }
    }
}

impl fmt::Display for MovementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "axis-separated" | "axis" => Ok(MovementPolicy::AxisSeparated),
            "heading" => Ok(MovementPolicy::Heading),
            other => Err(format!(
                "unknown movement policy '{}' (expected 'axis-separated' or 'heading')",
                other
            )),
        }
    }
}

/// Speeds and policy used when advancing a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Movement policy
    pub policy: MovementPolicy,
    /// Distance moved per frame, in pixels
    pub move_speed: f32,
    /// Heading change per frame, in degrees
    pub rotation_speed: f32,
}

impl MovementSettings {
    /// Checks that both speeds are positive and finite.
    pub fn validate(&self) -> SidestepResult<()> {
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SidestepError::InvalidLayout(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            policy: MovementPolicy::default(),
            move_speed: crate::config::DEFAULT_MOVE_SPEED,
            rotation_speed: crate::config::DEFAULT_ROTATION_SPEED,
        }
    }
}

/// Per-axis movement deltas produced by the movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    pub dx: f32,
    pub dy: f32,
}

impl MoveIntent {
    /// Reduces the movement keys to deltas of magnitude `speed`.
    ///
    /// Opposite keys held together cancel out.
    pub fn from_input(input: &FrameInput, speed: f32) -> Self {
        let mut intent = Self::default();
        if input.left {
            intent.dx -= speed;
        }
        if input.right {
            intent.dx += speed;
        }
        if input.up {
            intent.dy -= speed;
        }
        if input.down {
            intent.dy += speed;
        }
        intent
    }

    /// Returns the delta along one axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }
}

/// Returns the first obstacle overlapping `bounds`, if any.
///
/// Scanning stops at the first hit.
pub fn first_blocking<'a>(bounds: &Bounds, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|obstacle| obstacle.bounds().overlaps(bounds))
}

/// Moves the actor to `candidate` along one axis and reverts that axis alone
/// if the new rectangle overlaps an obstacle.
///
/// The other coordinate is whatever the actor currently holds. Returns true
/// if the move was kept.
pub fn try_axis(actor: &mut Actor, axis: Axis, candidate: f32, obstacles: &[Obstacle]) -> bool {
    let previous = actor.coordinate(axis);
    actor.set_coordinate(axis, candidate);

    if let Some(obstacle) = first_blocking(&actor.bounds, obstacles) {
        debug!(
            "{:?} move to {} blocked by obstacle at ({}, {})",
            axis,
            candidate,
            obstacle.bounds().x,
            obstacle.bounds().y
        );
        actor.set_coordinate(axis, previous);
        return false;
    }

    true
}

/// Applies keyboard deltas one axis at a time.
///
/// X is moved and tested with the frame-start Y; Y is then moved and tested
/// with the already-resolved X.
pub fn resolve_axis_separated(actor: &mut Actor, intent: MoveIntent, obstacles: &[Obstacle]) {
    for axis in Axis::ORDER {
        let candidate = actor.coordinate(axis) + intent.along(axis);
        try_axis(actor, axis, candidate, obstacles);
    }
}

/// Steps the actor toward its target by at most `speed` per axis, X then Y,
/// reverting each axis on its own when blocked.
pub fn seek_target(actor: &mut Actor, speed: f32, obstacles: &[Obstacle]) {
    let target = actor.target;
    for axis in Axis::ORDER {
        let goal = match axis {
            Axis::X => target.x,
            Axis::Y => target.y,
        };
        let candidate = step_toward(actor.coordinate(axis), goal, speed);
        try_axis(actor, axis, candidate, obstacles);
    }
}

/// Applies rotation keys to the heading and returns the displacement along it.
///
/// The heading is adjusted first, so a frame that both turns and moves moves
/// along the new heading.
pub fn steer(actor: &mut Actor, input: &FrameInput, settings: &MovementSettings) -> Vec2 {
    if input.left {
        actor.angle -= settings.rotation_speed;
    }
    if input.right {
        actor.angle += settings.rotation_speed;
    }

    let step = actor.heading() * settings.move_speed;
    let mut delta = Vec2::ZERO;
    if input.up {
        delta += step;
    }
    if input.down {
        delta -= step;
    }
    delta
}

/// Moves both axes at once and reverts both if the result overlaps anything.
///
/// Returns true if the move was kept.
pub fn resolve_combined(actor: &mut Actor, delta: Vec2, obstacles: &[Obstacle]) -> bool {
    let original = actor.position();
    actor.set_position(original + delta);

    if let Some(obstacle) = first_blocking(&actor.bounds, obstacles) {
        debug!(
            "Move by ({}, {}) blocked by obstacle at ({}, {})",
            delta.x,
            delta.y,
            obstacle.bounds().x,
            obstacle.bounds().y
        );
        actor.set_position(original);
        return false;
    }

    true
}
