//! # Input Module
//!
//! Input polling behind a capability trait, reduced to a per-frame snapshot.
//!
//! The simulation never talks to a device. The driver captures a [`FrameInput`]
//! from an [`InputSource`] once per frame and hands it to the scene.

pub mod keymap;

pub use keymap::*;

use macroquad::math::Vec2;
use macroquad::prelude::{is_key_down, is_mouse_button_down, mouse_position, MouseButton};

/// Logical keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

/// Pointer state for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Whether the primary button is held
    pub button_down: bool,
    /// Cursor position in screen pixels
    pub position: Vec2,
}

/// Something that can be polled for key and pointer state.
pub trait InputSource {
    /// Returns true if the logical key is held this frame.
    fn is_key_down(&self, key: Key) -> bool;

    /// Returns the pointer state this frame.
    fn pointer(&self) -> PointerState;
}

/// Input for one frame, independent of any windowing framework.
///
/// # Examples
///
/// ```
/// use sidestep::FrameInput;
///
/// let input = FrameInput { right: true, ..Default::default() };
/// assert!(input.has_movement());
/// assert!(!input.quit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
    /// Cursor position if the primary button is held
    pub click: Option<Vec2>,
}

impl FrameInput {
    /// Polls every key and the pointer once.
    pub fn capture(source: &impl InputSource) -> Self {
        let pointer = source.pointer();
        Self {
            up: source.is_key_down(Key::Up),
            down: source.is_key_down(Key::Down),
            left: source.is_key_down(Key::Left),
            right: source.is_key_down(Key::Right),
            quit: source.is_key_down(Key::Quit),
            click: pointer.button_down.then_some(pointer.position),
        }
    }

    /// Returns true if any movement key is held.
    pub fn has_movement(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Live input from macroquad's keyboard and mouse state.
pub struct MacroquadInput {
    keymap: KeyMap,
}

impl Default for MacroquadInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadInput {
    /// Creates an input source with the default key bindings.
    pub fn new() -> Self {
        Self {
            keymap: KeyMap::default(),
        }
    }
}

impl InputSource for MacroquadInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.keymap.codes_for(key).any(is_key_down)
    }

    fn pointer(&self) -> PointerState {
        let (x, y) = mouse_position();
        PointerState {
            button_down: is_mouse_button_down(MouseButton::Left),
            position: Vec2::new(x, y),
        }
    }
}
