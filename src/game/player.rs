//! Player character
//!
//! Runs left/right at a fixed speed, jumps from the ground, falls under a
//! constant per-frame weight. Touching an enemy or leaving the horizontal
//! bounds of the field ends the run.

use macroquad::math::Rect;

use crate::config::GameConfig;
use crate::input::{Direction, HeldDirections};
use super::animation::SpriteAnimation;
use super::collision;
use super::enemy::{Enemy, SecondaryEnemy};

/// What ended (or would end) the run this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    GroundEnemy,
    FlyingEnemy,
    FieldEdge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (positive = down)
    pub vy: f32,
    /// Horizontal velocity applied this frame
    pub speed: f32,
    pub animation: SpriteAnimation,

    // Tuning copied from config
    weight: f32,
    run_speed: f32,
    jump_impulse: f32,
    start_x: f32,
    start_frame: u32,
    field_width: f32,
    field_height: f32,
    hitbox_offset: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let p = &config.player;
        Self {
            x: p.start_x,
            y: config.ground_line(p.size),
            width: p.size,
            height: p.size,
            vy: 0.0,
            speed: 0.0,
            animation: SpriteAnimation::new(p.start_frame, p.max_frame, p.fps),
            weight: p.weight,
            run_speed: p.run_speed,
            jump_impulse: p.jump_impulse,
            start_x: p.start_x,
            start_frame: p.start_frame,
            field_width: config.field_width,
            field_height: config.field_height,
            hitbox_offset: config.enemy.hitbox_offset,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Lowest y the player can stand at
    pub fn ground_line(&self) -> f32 {
        self.field_height - self.height
    }

    pub fn on_ground(&self) -> bool {
        self.y >= self.ground_line()
    }

    /// Rightmost allowed x
    pub fn max_x(&self) -> f32 {
        self.field_width - self.width
    }

    /// Advance one frame. Returns every hazard touched this frame, one entry
    /// per colliding enemy plus one for crossing the field edge.
    ///
    /// Enemies are checked at their positions from the previous frame,
    /// before the player moves.
    pub fn update(
        &mut self,
        held: &HeldDirections,
        dt_ms: f32,
        enemies: &[Enemy],
        flyers: &[SecondaryEnemy],
    ) -> Vec<Hazard> {
        let mut hazards = Vec::new();
        let me = self.bounds();

        for enemy in enemies {
            if collision::enemy_hits_player(&enemy.bounds(), &me, self.hitbox_offset) {
                hazards.push(Hazard::GroundEnemy);
            }
        }
        for flyer in flyers {
            if collision::enemy_hits_player(&flyer.bounds(), &me, self.hitbox_offset) {
                hazards.push(Hazard::FlyingEnemy);
            }
        }

        self.animation.advance(dt_ms);

        // Horizontal movement (right wins when both are held)
        self.speed = if held.is_held(Direction::Right) {
            self.run_speed
        } else if held.is_held(Direction::Left) {
            -self.run_speed
        } else {
            0.0
        };
        self.x += self.speed;

        if self.x < 0.0 || self.x > self.max_x() {
            hazards.push(Hazard::FieldEdge);
            self.x = self.x.clamp(0.0, self.max_x());
        }

        // Vertical movement
        if held.is_held(Direction::Up) && self.on_ground() {
            self.vy = self.jump_impulse;
        }
        self.vy += self.weight;
        self.y += self.vy;
        if self.y > self.ground_line() {
            self.y = self.ground_line();
            self.vy = 0.0;
        }

        hazards
    }

    /// Back to the start position, standing still
    pub fn restart(&mut self) {
        self.x = self.start_x;
        self.y = self.ground_line();
        self.vy = 0.0;
        self.speed = 0.0;
        self.animation.frame = self.start_frame.min(self.animation.max_frame);
        self.animation.row = 0;
        self.animation.timer_ms = 0.0;
    }
}
