//! # Scene Layouts
//!
//! Serializable description of a scene: movement settings, the actor's
//! starting rectangle, and the obstacle list.

use crate::config::{DEFAULT_ACTOR_SIZE, DEFAULT_ACTOR_X, DEFAULT_ACTOR_Y};
use crate::{
    Actor, Bounds, MovementPolicy, MovementSettings, Obstacle, Scene, SidestepError,
    SidestepResult,
};
use log::info;
use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single obstacle in a layout file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    #[serde(flatten)]
    pub bounds: Bounds,
    /// RGBA color
    #[serde(default = "ObstacleConfig::default_color")]
    pub color: [u8; 4],
}

impl ObstacleConfig {
    fn default_color() -> [u8; 4] {
        [255, 0, 0, 255]
    }

    /// Converts the layout entry into a scene obstacle.
    pub fn to_obstacle(&self) -> Obstacle {
        let [r, g, b, a] = self.color;
        Obstacle::new(self.bounds, Color::from_rgba(r, g, b, a))
    }
}

/// Complete description of a scene.
///
/// # Examples
///
/// ```
/// use sidestep::SceneConfig;
///
/// let config = SceneConfig::from_json(r#"{ "obstacles": [] }"#).unwrap();
/// assert!(config.obstacles.is_empty());
/// assert!(config.build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Policy and speeds
    pub movement: MovementSettings,
    /// Actor's starting rectangle
    pub actor: Bounds,
    /// Static obstacles
    pub obstacles: Vec<ObstacleConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            movement: MovementSettings::default(),
            actor: Bounds::new(
                DEFAULT_ACTOR_X,
                DEFAULT_ACTOR_Y,
                DEFAULT_ACTOR_SIZE,
                DEFAULT_ACTOR_SIZE,
            ),
            obstacles: vec![
                ObstacleConfig {
                    bounds: Bounds::new(200.0, 200.0, 64.0, 64.0),
                    color: [255, 0, 0, 255],
                },
                ObstacleConfig {
                    bounds: Bounds::new(400.0, 60.0, 32.0, 240.0),
                    color: [40, 120, 255, 255],
                },
                ObstacleConfig {
                    bounds: Bounds::new(60.0, 360.0, 260.0, 32.0),
                    color: [40, 200, 90, 255],
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Parses a layout from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> SidestepResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the layout to pretty-printed JSON.
    pub fn to_json(&self) -> SidestepResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a layout file.
    pub fn load(path: impl AsRef<Path>) -> SidestepResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        info!(
            "Loaded layout from {} ({} obstacles)",
            path.display(),
            config.obstacles.len()
        );
        Ok(config)
    }

    /// Reads and validates `path` if given, otherwise returns the default layout.
    pub fn load_or_default(path: Option<&Path>) -> SidestepResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the policy and move speed where an override is given.
    ///
    /// Overrides are not validated here; `build` rejects a bad speed.
    pub fn with_overrides(
        mut self,
        policy: Option<MovementPolicy>,
        move_speed: Option<f32>,
    ) -> Self {
        if let Some(policy) = policy {
            self.movement.policy = policy;
        }
        if let Some(move_speed) = move_speed {
            self.movement.move_speed = move_speed;
        }
        self
    }

    /// Checks rectangle sizes, speeds, and that the actor starts clear of
    /// every obstacle.
    pub fn validate(&self) -> SidestepResult<()> {
        check_bounds("actor", &self.actor)?;
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            check_bounds(&format!("obstacle {}", index), &obstacle.bounds)?;
        }
        self.build().map(|_| ())
    }

    /// Builds a fresh scene from this layout.
    pub fn build(&self) -> SidestepResult<Scene> {
        let obstacles = self.obstacles.iter().map(ObstacleConfig::to_obstacle).collect();
        Scene::new(Actor::new(self.actor), obstacles, self.movement)
    }
}

fn check_bounds(name: &str, bounds: &Bounds) -> SidestepResult<()> {
    let values = [bounds.x, bounds.y, bounds.width, bounds.height];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SidestepError::InvalidLayout(format!(
            "{} has a non-finite coordinate",
            name
        )));
    }
    if bounds.is_degenerate() {
        return Err(SidestepError::InvalidLayout(format!(
            "{} must have positive width and height, got {}x{}",
            name, bounds.width, bounds.height
        )));
    }
    Ok(())
}
