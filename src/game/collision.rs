//! Collision System
//!
//! Every entity is treated as a circle around the centre of its bounding
//! box. Enemy hits use a third of each width as the radius, which forgives
//! the transparent margins of the sprites. Letter pickups use half widths.

use macroquad::math::{Rect, Vec2};

/// Centre of an enemy's hit circle, shifted left by `offset`
fn enemy_centre(enemy: &Rect, offset: f32) -> Vec2 {
    let c = enemy.center();
    Vec2::new(c.x - offset, c.y)
}

/// Centre of the player's hit circle against enemies, shifted down by `offset`
fn player_centre(player: &Rect, offset: f32) -> Vec2 {
    let c = player.center();
    Vec2::new(c.x, c.y + offset)
}

/// Distance between the hit centres of an enemy and the player
pub fn enemy_distance(enemy: &Rect, player: &Rect, offset: f32) -> f32 {
    enemy_centre(enemy, offset).distance(player_centre(player, offset))
}

/// Radius sum below which an enemy hits the player
pub fn enemy_threshold(enemy: &Rect, player: &Rect) -> f32 {
    enemy.w / 3.0 + player.w / 3.0
}

/// True if the enemy touches the player
pub fn enemy_hits_player(enemy: &Rect, player: &Rect, offset: f32) -> bool {
    enemy_distance(enemy, player, offset) < enemy_threshold(enemy, player)
}

/// True if a letter is close enough to the player to be picked up
pub fn letter_touches_player(letter: &Rect, player: &Rect) -> bool {
    letter.center().distance(player.center()) < letter.w / 2.0 + player.w / 2.0
}
