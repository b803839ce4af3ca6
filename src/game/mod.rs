//! # Game Module
//!
//! The simulation core: scene state, collision testing, and movement resolution.
//!
//! This module contains everything that decides where the actor ends up each frame:
//! - Rectangle overlap testing
//! - The actor and obstacle entities
//! - Movement policies and per-axis resolution
//! - The scene that owns all state and advances one frame at a time
//! - Scene layouts loaded from JSON

pub mod collision;
pub mod entities;
pub mod layout;
pub mod movement;
pub mod state;

pub use collision::*;
pub use entities::*;
pub use layout::*;
pub use movement::*;
pub use state::*;

/// One of the two screen axes.
///
/// Movement is resolved one axis at a time, always in [`Axis::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Resolution order: horizontal first, then vertical.
    pub const ORDER: [Axis; 2] = [Axis::X, Axis::Y];
}
