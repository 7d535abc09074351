//! Input action definitions
//!
//! Keyboard keys map onto two kinds of input: directions, which are held
//! and sampled every frame, and commands, which fire once per key press.

use macroquad::prelude::KeyCode;

/// A held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Reset everything and resume play (only honoured while game over)
    Restart,
    /// Enter or leave full-screen
    ToggleFullscreen,
    /// Leave the game (native builds only)
    Quit,
}

impl Direction {
    /// Arrow keys and WASD
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up | KeyCode::W => Some(Direction::Up),
            KeyCode::Down | KeyCode::S => Some(Direction::Down),
            KeyCode::Left | KeyCode::A => Some(Direction::Left),
            KeyCode::Right | KeyCode::D => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Command {
    /// Command for a freshly pressed key, if any.
    /// The confirm key only means something once the run is over.
    pub fn from_key(key: KeyCode, game_over: bool) -> Option<Command> {
        match key {
            KeyCode::Enter | KeyCode::KpEnter if game_over => Some(Command::Restart),
            KeyCode::F | KeyCode::F11 => Some(Command::ToggleFullscreen),
            KeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}
