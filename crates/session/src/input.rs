//! Keyboard-to-command mapping.
//!
//! The frontend owns the actual device listeners; it translates raw key
//! events into [`Key`] values and the session maps them onto directional
//! move commands. WASD and the arrow keys are both bound, matching the
//! original input mapping.

use maze_core::Direction;

/// Device-independent key event delivered by the frontend on key-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

/// Maps a key to a directional command, case-insensitively for letters.
/// Unbound keys map to `None`.
pub fn direction_for(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
    }
}
