//! # Entities
//!
//! The player-controlled actor and the static obstacles it collides with.

use crate::{heading_vector, Axis, Bounds};
use macroquad::color::Color;
use macroquad::math::Vec2;

/// A static rectangle that blocks the actor.
///
/// Obstacles are built once from the scene layout and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    bounds: Bounds,
    color: Color,
}

impl Obstacle {
    /// Creates a new obstacle.
    pub fn new(bounds: Bounds, color: Color) -> Self {
        Self { bounds, color }
    }

    /// Returns the obstacle's rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns the obstacle's display color.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// The single player-controlled rectangle.
///
/// Besides its rectangle the actor carries a heading (used by
/// [`MovementPolicy::Heading`](crate::MovementPolicy::Heading)) and a movement
/// target with a seeking flag (used by
/// [`MovementPolicy::AxisSeparated`](crate::MovementPolicy::AxisSeparated)).
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Current rectangle
    pub bounds: Bounds,
    /// Heading in degrees; not normalized
    pub angle: f32,
    /// Point the actor walks toward while seeking
    pub target: Vec2,
    /// Whether the actor is walking toward `target`
    pub seeking_target: bool,
}

impl Actor {
    /// Creates an actor facing along +x with no target.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            angle: 0.0,
            target: bounds.position(),
            seeking_target: false,
        }
    }

    /// Returns the top-left corner.
    pub fn position(&self) -> Vec2 {
        self.bounds.position()
    }

    /// Moves the top-left corner to `position`.
    pub fn set_position(&mut self, position: Vec2) {
        self.bounds = self.bounds.at(position);
    }

    /// Returns the coordinate along one axis.
    pub fn coordinate(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.bounds.x,
            Axis::Y => self.bounds.y,
        }
    }

    /// Sets the coordinate along one axis.
    pub fn set_coordinate(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.bounds.x = value,
            Axis::Y => self.bounds.y = value,
        }
    }

    /// Unit vector along the current heading.
    pub fn heading(&self) -> Vec2 {
        heading_vector(self.angle)
    }

    /// Starts walking toward `target`.
    pub fn seek(&mut self, target: Vec2) {
        self.target = target;
        self.seeking_target = true;
    }

    /// Cancels any active seek. The stored target is kept.
    pub fn stop_seeking(&mut self) {
        self.seeking_target = false;
    }

    /// Returns true if the actor stands exactly on its target.
    pub fn at_target(&self) -> bool {
        self.position() == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_actor_creation() {
        let actor = Actor::new(Bounds::new(10.0, 20.0, 32.0, 32.0));
        assert_eq!(actor.position(), vec2(10.0, 20.0));
        assert_eq!(actor.angle, 0.0);
        assert!(!actor.seeking_target);
        assert!(actor.at_target());
    }

    #[test]
    fn test_axis_coordinates() {
        let mut actor = Actor::new(Bounds::new(10.0, 20.0, 32.0, 32.0));
        actor.set_coordinate(Axis::X, 15.0);
        actor.set_coordinate(Axis::Y, 25.0);
        assert_eq!(actor.coordinate(Axis::X), 15.0);
        assert_eq!(actor.coordinate(Axis::Y), 25.0);
        assert_eq!(actor.bounds.width, 32.0);
    }

    #[test]
    fn test_seek_and_stop() {
        let mut actor = Actor::new(Bounds::new(0.0, 0.0, 8.0, 8.0));
        actor.seek(vec2(50.0, 60.0));
        assert!(actor.seeking_target);
        assert_eq!(actor.target, vec2(50.0, 60.0));

        actor.stop_seeking();
        assert!(!actor.seeking_target);
        assert_eq!(actor.target, vec2(50.0, 60.0));
    }

    #[test]
    fn test_obstacle_accessors() {
        let obstacle = Obstacle::new(Bounds::new(1.0, 2.0, 3.0, 4.0), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(obstacle.bounds().width, 3.0);
        assert_eq!(obstacle.color().r, 1.0);
    }
}
