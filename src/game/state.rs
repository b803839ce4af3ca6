//! # Scene State Module
//!
//! The explicitly owned state of a running demo and the per-frame update.
//!
//! A [`Scene`] holds the actor, the obstacles, and the movement settings. The
//! frame driver calls [`Scene::advance`] once per frame with that frame's input
//! and stops when it returns [`FrameOutcome::Terminate`].

use crate::{
    first_blocking, resolve_axis_separated, resolve_combined, seek_target, steer, Actor, Bounds,
    FrameInput, MoveIntent, MovementPolicy, MovementSettings, Obstacle, SidestepError,
    SidestepResult,
};
use log::{debug, info, trace};
use macroquad::math::Vec2;

/// What the driver should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep running
    Continue,
    /// The user asked to end the session
    Terminate,
}

impl FrameOutcome {
    /// Returns true if the session should end.
    pub fn is_terminate(self) -> bool {
        self == FrameOutcome::Terminate
    }
}

/// The actor, the obstacles around it, and how it moves.
///
/// Obstacles are fixed at construction. Only the actor changes, once per
/// call to [`Scene::advance`], and after every call it overlaps no obstacle.
#[derive(Debug, Clone)]
pub struct Scene {
    actor: Actor,
    obstacles: Vec<Obstacle>,
    settings: MovementSettings,
    frame_count: u64,
}

impl Scene {
    /// Creates a scene, rejecting invalid speeds and an actor that starts
    /// inside an obstacle.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidestep::{Actor, Bounds, MovementSettings, Scene};
    ///
    /// let actor = Actor::new(Bounds::new(0.0, 0.0, 10.0, 10.0));
    /// let scene = Scene::new(actor, Vec::new(), MovementSettings::default()).unwrap();
    /// assert_eq!(scene.frame_count(), 0);
    /// ```
    pub fn new(
        actor: Actor,
        obstacles: Vec<Obstacle>,
        settings: MovementSettings,
    ) -> SidestepResult<Self> {
        settings.validate()?;
        ensure_clear(&actor.bounds, &obstacles, "starts")?;

        Ok(Self {
            actor,
            obstacles,
            settings,
            frame_count: 0,
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// A quit request ends the session before anything moves.
    pub fn advance(&mut self, input: &FrameInput) -> FrameOutcome {
        if input.quit {
            info!("Quit requested after {} frames", self.frame_count);
            return FrameOutcome::Terminate;
        }

        match self.settings.policy {
            MovementPolicy::AxisSeparated => self.advance_axis_separated(input),
            MovementPolicy::Heading => self.advance_heading(input),
        }

        self.frame_count += 1;
        trace!(
            "Frame {}: actor at ({}, {})",
            self.frame_count,
            self.actor.bounds.x,
            self.actor.bounds.y
        );

        FrameOutcome::Continue
    }

    /// Keyboard pass, then pointer check, then seek pass.
    fn advance_axis_separated(&mut self, input: &FrameInput) {
        if input.has_movement() {
            if self.actor.seeking_target {
                debug!("Keyboard input cancelled seek");
            }
            self.actor.stop_seeking();

            let intent = MoveIntent::from_input(input, self.settings.move_speed);
            resolve_axis_separated(&mut self.actor, intent, &self.obstacles);
        }

        if let Some(click) = input.click {
            self.seek(click);
        }

        if self.actor.seeking_target {
            seek_target(&mut self.actor, self.settings.move_speed, &self.obstacles);

            if self.actor.at_target() {
                debug!("Reached target ({}, {})", self.actor.target.x, self.actor.target.y);
                self.actor.stop_seeking();
            }
        }
    }

    fn advance_heading(&mut self, input: &FrameInput) {
        let delta = steer(&mut self.actor, input, &self.settings);
        resolve_combined(&mut self.actor, delta, &self.obstacles);
    }

    /// Returns true if `bounds` overlaps any obstacle.
    pub fn is_blocked(&self, bounds: &Bounds) -> bool {
        first_blocking(bounds, &self.obstacles).is_some()
    }

    /// Returns the actor.
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Starts walking toward `target`. Under the axis-separated policy the
    /// actor steps toward it on following frames until it arrives or a
    /// movement key is pressed.
    pub fn seek(&mut self, target: Vec2) {
        if !self.actor.seeking_target || self.actor.target != target {
            debug!("Seeking target ({}, {})", target.x, target.y);
        }
        self.actor.seek(target);
    }

    /// Points the actor along `angle` degrees. Only the heading changes.
    pub fn set_heading(&mut self, angle: f32) {
        self.actor.angle = angle;
    }

    /// Moves the actor's top-left corner to `position`.
    ///
    /// Fails and leaves the actor where it was if the new rectangle would
    /// overlap an obstacle.
    pub fn place_actor(&mut self, position: Vec2) -> SidestepResult<()> {
        let candidate = self.actor.bounds.at(position);
        ensure_clear(&candidate, &self.obstacles, "would be placed")?;
        self.actor.set_position(position);
        Ok(())
    }

    /// Returns the obstacles.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Returns the movement settings.
    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    /// Returns the number of frames advanced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

fn ensure_clear(bounds: &Bounds, obstacles: &[Obstacle], verb: &str) -> SidestepResult<()> {
    match first_blocking(bounds, obstacles) {
        Some(obstacle) => Err(SidestepError::InvalidLayout(format!(
            "actor at ({}, {}) {} inside obstacle at ({}, {})",
            bounds.x,
            bounds.y,
            verb,
            obstacle.bounds().x,
            obstacle.bounds().y
        ))),
        None => Ok(()),
    }
}
