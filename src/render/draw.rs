//! Frame drawing
//!
//! Fixed order: background, player, ground enemies, flying enemies, letter,
//! status text, notice. Then the letterbox bars go on top so sprites that
//! stick out of the field are cut off at its edges.

use macroquad::prelude::*;

use crate::asset::GameAssets;
use crate::game::GameState;
use super::overlay::Overlay;
use super::viewport::Viewport;

/// Field colour behind the background tile (shows when it failed to load)
const BACKDROP: Color = Color::new(0.45, 0.62, 0.78, 1.0);

const STATUS_FONT_SIZE: f32 = 40.0;
const LETTER_FONT_SIZE: f32 = 60.0;
const NOTICE_FONT_SIZE: f32 = 24.0;
const SCORE_POS: (f32, f32) = (20.0, 30.0);
const GAME_OVER_Y: f32 = 200.0;
const SHADOW_OFFSET: f32 = 2.0;

pub const GAME_OVER_TEXT: &str = "GAME OVER! Press Enter to Restart";

/// Source rectangle of one cell in a single-row (or gridded) sprite sheet
pub fn sprite_cell(frame: u32, row: u32, cell_width: f32, cell_height: f32) -> Rect {
    Rect::new(
        frame as f32 * cell_width,
        row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

fn blit(texture: &Texture2D, vp: &Viewport, source: Option<Rect>, dest: Rect) {
    let dest = vp.rect(dest.x, dest.y, dest.w, dest.h);
    draw_texture_ex(
        texture,
        dest.x,
        dest.y,
        WHITE,
        DrawTextureParams {
            source,
            dest_size: Some(vec2(dest.w, dest.h)),
            ..Default::default()
        },
    );
}

/// Text with its baseline at field coordinates (x, y)
fn text(vp: &Viewport, s: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(s, vp.x(x), vp.y(y), size * vp.scale, color);
}

/// Text horizontally centred on field x
fn text_centred(vp: &Viewport, s: &str, cx: f32, y: f32, size: f32, color: Color) {
    let font_size = (size * vp.scale).round().max(1.0);
    let dims = measure_text(s, None, font_size as u16, 1.0);
    draw_text(s, vp.x(cx) - dims.width / 2.0, vp.y(y), font_size, color);
}

pub fn draw_frame(state: &GameState, assets: &GameAssets, overlay: &Overlay) {
    let (sw, sh) = (screen_width(), screen_height());
    let config = &state.config;
    let vp = Viewport::fit(sw, sh, config.field_width, config.field_height);

    clear_background(BLACK);
    let field = vp.field();
    draw_rectangle(field.x, field.y, field.w, field.h, BACKDROP);

    // Background
    if let Some(tex) = &assets.background {
        let bg = &state.background;
        for x in bg.draw_offsets() {
            blit(tex, &vp, None, Rect::new(x, bg.y, bg.tile_width, bg.tile_height));
        }
    }

    // Player
    if let Some(tex) = &assets.player {
        let p = &state.player;
        let src = sprite_cell(p.animation.frame, p.animation.row, p.width, p.height);
        blit(tex, &vp, Some(src), p.bounds());
    }

    // Ground enemies
    if let Some(tex) = &assets.enemy {
        for enemy in &state.enemies {
            let src = sprite_cell(enemy.animation.frame, 0, enemy.width, enemy.height);
            blit(tex, &vp, Some(src), enemy.bounds());
        }
    }

    // Flying enemies (sheet cells are larger than the drawn size)
    if let Some(tex) = &assets.flyer {
        let cell = &config.secondary;
        for flyer in &state.flyers {
            let src = sprite_cell(flyer.flap.frame, 0, cell.sprite_width, cell.sprite_height);
            blit(tex, &vp, Some(src), flyer.bounds());
        }
    }

    // Letter: image if there is one for the glyph, text otherwise
    if let Some(letter) = &state.letter {
        match assets.letters.get(&letter.glyph) {
            Some(tex) => blit(tex, &vp, None, letter.bounds()),
            None => {
                let mut buf = [0u8; 4];
                let glyph = letter.glyph.encode_utf8(&mut buf);
                text(&vp, glyph, letter.x, letter.y + letter.height, LETTER_FONT_SIZE, WHITE);
            }
        }
    }

    draw_status(&vp, state);

    if let Some(notice) = overlay.current() {
        text(&vp, notice, 20.0, config.field_height - 20.0, NOTICE_FONT_SIZE, YELLOW);
    }

    for bar in vp.bars(sw, sh) {
        draw_rectangle(bar.x, bar.y, bar.w, bar.h, BLACK);
    }
}

fn draw_status(vp: &Viewport, state: &GameState) {
    let (x, y) = SCORE_POS;
    text(vp, &score_text(state.score), x, y, STATUS_FONT_SIZE, BLACK);

    if state.game_over {
        let cx = state.config.field_width / 2.0;
        text_centred(vp, GAME_OVER_TEXT, cx, GAME_OVER_Y, STATUS_FONT_SIZE, BLACK);
        text_centred(
            vp,
            GAME_OVER_TEXT,
            cx + SHADOW_OFFSET,
            GAME_OVER_Y + SHADOW_OFFSET,
            STATUS_FONT_SIZE,
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_cell() {
        assert_eq!(sprite_cell(3, 0, 200.0, 200.0), Rect::new(600.0, 0.0, 200.0, 200.0));
        assert_eq!(sprite_cell(2, 1, 160.0, 119.0), Rect::new(320.0, 119.0, 160.0, 119.0));
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(150), "Score: 150");
    }
}
