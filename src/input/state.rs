//! Input state management
//!
//! Tracks which directions are held from key press/release edges and
//! collects one-shot commands for the frame loop to act on.

use macroquad::prelude::*;
use super::{Command, Direction};

/// Directions currently held, in the order they were pressed, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldDirections {
    keys: Vec<Direction>,
}

impl HeldDirections {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a direction if it is not already held
    pub fn press(&mut self, dir: Direction) {
        if !self.keys.contains(&dir) {
            self.keys.push(dir);
        }
    }

    pub fn release(&mut self, dir: Direction) {
        self.keys.retain(|&k| k != dir);
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.keys.contains(&dir)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Build a held set directly
    #[cfg(test)]
    pub fn with(dirs: &[Direction]) -> Self {
        let mut held = Self::new();
        for &dir in dirs {
            held.press(dir);
        }
        held
    }
}

/// Keyboard input state for the game
#[derive(Debug, Default)]
pub struct InputState {
    pub held: HeldDirections,
    pending: Vec<Command>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key-down edge
    pub fn key_down(&mut self, key: KeyCode, game_over: bool) {
        if let Some(dir) = Direction::from_key(key) {
            self.held.press(dir);
        } else if let Some(cmd) = Command::from_key(key, game_over) {
            if !self.pending.contains(&cmd) {
                self.pending.push(cmd);
            }
        }
    }

    /// Feed a key-up edge
    pub fn key_up(&mut self, key: KeyCode) {
        if let Some(dir) = Direction::from_key(key) {
            self.held.release(dir);
        }
    }

    /// Call once per frame before ticking the game
    pub fn poll(&mut self, game_over: bool) {
        for key in get_keys_pressed() {
            self.key_down(key, game_over);
        }
        for key in get_keys_released() {
            self.key_up(key);
        }
        // A release can be lost while the window is unfocused
        let stale: Vec<Direction> = [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
            .into_iter()
            .filter(|&dir| self.held.is_held(dir) && !any_key_down_for(dir))
            .collect();
        for dir in stale {
            self.held.release(dir);
        }
    }

    /// Take the commands collected since the last call
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }
}

fn any_key_down_for(dir: Direction) -> bool {
    get_keys_down()
        .into_iter()
        .any(|key| Direction::from_key(key) == Some(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_deduplicated() {
        let mut held = HeldDirections::new();
        held.press(Direction::Left);
        held.press(Direction::Left);
        held.press(Direction::Up);
        assert_eq!(held.len(), 2);
        assert!(held.is_held(Direction::Left));
        assert!(held.is_held(Direction::Up));
    }

    #[test]
    fn test_release_removes_only_that_direction() {
        let mut held = HeldDirections::with(&[Direction::Left, Direction::Up]);
        held.release(Direction::Left);
        assert!(!held.is_held(Direction::Left));
        assert!(held.is_held(Direction::Up));
        held.release(Direction::Down);
        assert_eq!(held.len(), 1);
    }

    #[test]
    fn test_arrow_and_wasd_share_a_direction() {
        let mut input = InputState::new();
        input.key_down(KeyCode::Right, false);
        input.key_down(KeyCode::D, false);
        assert_eq!(input.held.len(), 1);
        input.key_up(KeyCode::D);
        assert!(input.held.is_empty());
    }

    #[test]
    fn test_restart_only_queued_while_game_over() {
        let mut input = InputState::new();
        input.key_down(KeyCode::Enter, false);
        assert!(input.drain_commands().is_empty());

        input.key_down(KeyCode::Enter, true);
        input.key_down(KeyCode::KpEnter, true);
        assert_eq!(input.drain_commands(), vec![Command::Restart]);
        assert!(input.drain_commands().is_empty());
    }

    #[test]
    fn test_commands_do_not_touch_held_set() {
        let mut input = InputState::new();
        input.key_down(KeyCode::F, false);
        assert!(input.held.is_empty());
        assert_eq!(input.drain_commands(), vec![Command::ToggleFullscreen]);
    }
}
