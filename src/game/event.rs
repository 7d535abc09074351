//! Event System
//!
//! The simulation never plays sounds or touches the screen itself. It queues
//! events during a tick and the frame loop drains them afterwards, so audio
//! and the overlay can react without the simulation knowing about them.

use super::enemy::EnemyKind;
use super::player::Hazard;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player touched a hazard (one per hazard per frame)
    Collision(Hazard),
    /// A letter was picked up; `score` is the total after the award
    LetterCollected { glyph: char, score: u32 },
    EnemySpawned(EnemyKind),
    /// The run just ended
    GameOver { score: u32 },
    Restarted,
}
