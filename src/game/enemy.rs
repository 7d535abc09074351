//! Enemies
//!
//! Ground enemies run in from the right edge along the ground line at a
//! constant speed. Flying enemies drift left at a random speed while bobbing
//! up and down on a sine curve.

use macroquad::math::Rect;
use rand::Rng;

use crate::config::{EnemyConfig, GameConfig, SecondaryEnemyConfig};
use super::animation::{FlapAnimation, SpriteAnimation};

/// Spread of the initial bob phase in radians
const PHASE_SPREAD: f32 = 2.0;

/// Which kind of enemy a spawn produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Ground,
    Flying,
}

/// `rng` sample in `0..max`, or 0 if the range is empty
fn roll<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub animation: SpriteAnimation,
}

impl Enemy {
    /// New enemy just beyond the right edge, standing on the ground line
    pub fn new(config: &GameConfig) -> Self {
        let EnemyConfig { width, height, speed, max_frame, fps, .. } = config.enemy;
        Self {
            x: config.field_width,
            y: config.ground_line(height),
            width,
            height,
            speed,
            animation: SpriteAnimation::new(0, max_frame, fps),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one frame. Returns false once the enemy has fully left the
    /// field on the left.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        self.animation.advance(dt_ms);
        self.x -= self.speed;
        self.x >= -self.width
    }
}

/// Ranges of x (left edge) an opening-wave flyer of `width` may take, left
/// and right of the player's start column. `None` where no room is left.
fn opening_spans(config: &GameConfig, width: f32) -> (Option<(f32, f32)>, Option<(f32, f32)>) {
    let clearance = config.secondary.start_clearance;
    let max_x = (config.field_width - width).max(0.0);
    let left_end = config.player.start_x - clearance - width;
    let right_start = config.player.start_x + config.player.size + clearance;
    let left = (left_end > 0.0).then(|| (0.0, left_end.min(max_x)));
    let right = (right_start < max_x).then(|| (right_start.max(0.0), max_x));
    (left, right)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryEnemy {
    pub x: f32,
    pub y: f32,
    /// Drawn size (sprite cell shrunk by the scale divisor)
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Phase of the bob curve in radians
    pub angle: f32,
    pub angle_speed: f32,
    /// Bob amplitude per frame
    pub curve: f32,
    pub flap: FlapAnimation,
    max_y: f32,
}

impl SecondaryEnemy {
    fn roll_at<R: Rng>(config: &SecondaryEnemyConfig, field_height: f32, x: f32, rng: &mut R) -> Self {
        let width = config.sprite_width / config.scale_divisor;
        let height = config.sprite_height / config.scale_divisor;
        let max_y = (field_height - height).max(0.0);
        let speed = if config.max_speed > config.min_speed {
            rng.gen_range(config.min_speed..config.max_speed)
        } else {
            config.min_speed
        };
        let cadence = rng.gen_range(1..=config.max_flap_frames.max(1));
        Self {
            x,
            y: roll(rng, max_y),
            width,
            height,
            speed,
            angle: roll(rng, PHASE_SPREAD),
            angle_speed: roll(rng, config.max_angle_speed),
            curve: roll(rng, config.max_curve),
            flap: FlapAnimation::new(config.max_frame, cadence),
            max_y,
        }
    }

    /// Random flyer somewhere inside the field (the opening wave), never
    /// within `start_clearance` of the player's start column
    pub fn spawn_in_field<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let width = config.secondary.sprite_width / config.secondary.scale_divisor;
        let (left, right) = opening_spans(config, width);
        let x = match (left, right) {
            (None, None) => (config.field_width - width).max(0.0),
            (Some(l), None) => l.0 + roll(rng, l.1 - l.0),
            (None, Some(r)) => r.0 + roll(rng, r.1 - r.0),
            (Some(l), Some(r)) => {
                let (left_len, right_len) = (l.1 - l.0, r.1 - r.0);
                let t = roll(rng, left_len + right_len);
                if t < left_len {
                    l.0 + t
                } else {
                    r.0 + (t - left_len)
                }
            }
        };
        Self::roll_at(&config.secondary, config.field_height, x, rng)
    }

    /// Random flyer entering at the right edge
    pub fn spawn_at_edge<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self::roll_at(&config.secondary, config.field_height, config.field_width, rng)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one simulated frame. Returns false once off the left edge.
    pub fn update(&mut self, frame_counter: u64) -> bool {
        self.x -= self.speed;
        self.y = (self.y + self.curve * self.angle.sin()).clamp(0.0, self.max_y);
        self.angle += self.angle_speed;
        self.flap.advance(frame_counter);
        self.x >= -self.width
    }
}
