//! # Key Bindings
//!
//! Mapping from physical macroquad key codes to logical [`Key`]s.

use crate::Key;
use macroquad::input::KeyCode;

/// Physical keys bound to each logical key.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, Key)>,
}

impl Default for KeyMap {
    /// Arrow keys and WASD for movement, Escape to quit.
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Up, Key::Up),
                (KeyCode::W, Key::Up),
                (KeyCode::Down, Key::Down),
                (KeyCode::S, Key::Down),
                (KeyCode::Left, Key::Left),
                (KeyCode::A, Key::Left),
                (KeyCode::Right, Key::Right),
                (KeyCode::D, Key::Right),
                (KeyCode::Escape, Key::Quit),
            ],
        }
    }
}

impl KeyMap {
    /// Returns every physical key bound to `key`.
    pub fn codes_for(&self, key: Key) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| *bound == key)
            .map(|(code, _)| *code)
    }
}
