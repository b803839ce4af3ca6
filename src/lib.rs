//! # Sidestep
//!
//! A small 2D movement-and-collision demo: one player-controlled actor moves
//! around a screen of stationary rectangular obstacles and is never allowed to
//! overlap them.
//!
//! ## Architecture Overview
//!
//! The simulation core is independent of any window or input device:
//!
//! - **Game**: the [`Scene`] (actor plus obstacles), the collision test, and the
//!   movement policies that resolve one frame of movement
//! - **Input**: the [`InputSource`] capability and the framework-free [`FrameInput`]
//!   snapshot the core consumes
//! - **Rendering**: the [`Canvas`] capability and [`render_scene`], which draws a
//!   scene without feeding anything back into it
//!
//! macroquad provides the concrete [`MacroquadInput`] and [`MacroquadDisplay`]
//! used by the binary; tests drive the core with scripted inputs instead.

pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Sidestep demo.
#[derive(thiserror::Error, Debug)]
pub enum SidestepError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Scene layout is unusable
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type used throughout the Sidestep codebase.
pub type SidestepResult<T> = Result<T, SidestepError>;

/// Version information for the demo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Demo configuration constants.
pub mod config {
    /// Window title
    pub const WINDOW_TITLE: &str = "Sidestep";

    /// Default window width in pixels
    pub const DEFAULT_WINDOW_WIDTH: i32 = 640;

    /// Default window height in pixels
    pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;

    /// Frames per second the driver is expected to run at
    pub const TARGET_FPS: u64 = 60;

    /// Actor starting x coordinate (left edge)
    pub const DEFAULT_ACTOR_X: f32 = 100.0;

    /// Actor starting y coordinate (top edge)
    pub const DEFAULT_ACTOR_Y: f32 = 100.0;

    /// Actor size in pixels
    pub const DEFAULT_ACTOR_SIZE: f32 = 32.0;

    /// Distance moved per frame, in pixels
    pub const DEFAULT_MOVE_SPEED: f32 = 2.0;

    /// Heading change per frame, in degrees
    pub const DEFAULT_ROTATION_SPEED: f32 = 2.0;
}
