//! Letter collectibles
//!
//! One letter at a time floats in from the right edge at mid height. The
//! player scores by touching it; a missed letter drifts off the left edge.
//! Either way a fresh random letter replaces it on the following frame.

use macroquad::math::Rect;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::GameConfig;
use super::collision;

/// Result of moving a letter by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    Moving,
    Collected,
    Escaped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub glyph: char,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Letter {
    /// Letter with an explicit glyph, entering at the right edge
    pub fn new(config: &GameConfig, glyph: char) -> Self {
        let size = config.letter.size;
        Self {
            glyph,
            x: config.field_width,
            y: config.field_height / 2.0 - size,
            width: size,
            height: size,
            speed: config.letter.speed,
        }
    }

    /// Letter with a glyph drawn uniformly from the configured alphabet
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let glyph = config.letter.alphabet.chars().choose(rng).unwrap_or('A');
        Self::new(config, glyph)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move one frame left, then test for pickup against `player`
    pub fn update(&mut self, player: &Rect) -> LetterOutcome {
        self.x -= self.speed;
        if collision::letter_touches_player(&self.bounds(), player) {
            LetterOutcome::Collected
        } else if self.x < -self.width {
            LetterOutcome::Escaped
        } else {
            LetterOutcome::Moving
        }
    }
}
