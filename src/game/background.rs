//! Scrolling background
//!
//! One tile drawn twice side by side. The second copy overlaps the first by
//! one scroll step so no seam opens between them.

use crate::config::BackgroundConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// Left edge of the first copy (zero or negative)
    pub x: f32,
    pub y: f32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub scroll_speed: f32,
}

impl Background {
    pub fn new(config: &BackgroundConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            scroll_speed: config.scroll_speed,
        }
    }

    pub fn update(&mut self) {
        self.x -= self.scroll_speed;
        if self.x < -self.tile_width {
            self.x = 0.0;
        }
    }

    /// Left edges of both copies
    pub fn draw_offsets(&self) -> [f32; 2] {
        [self.x, self.x + self.tile_width - self.scroll_speed]
    }

    pub fn restart(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_left() {
        let mut bg = Background::new(&BackgroundConfig::default());
        bg.update();
        assert_eq!(bg.x, -10.0);
        assert_eq!(bg.draw_offsets(), [-10.0, 2380.0]);
    }

    #[test]
    fn test_wraps_after_full_tile() {
        let mut bg = Background::new(&BackgroundConfig::default());
        // 240 steps land exactly on -tile_width, which is still drawn
        for _ in 0..240 {
            bg.update();
        }
        assert_eq!(bg.x, -2400.0);
        bg.update();
        assert_eq!(bg.x, 0.0);
    }

    #[test]
    fn test_offset_never_below_minus_tile() {
        let mut bg = Background::new(&BackgroundConfig {
            tile_width: 95.0,
            tile_height: 720.0,
            scroll_speed: 10.0,
        });
        for _ in 0..500 {
            bg.update();
            assert!(bg.x <= 0.0 && bg.x >= -bg.tile_width);
        }
    }

    #[test]
    fn test_restart() {
        let mut bg = Background::new(&BackgroundConfig::default());
        bg.update();
        bg.restart();
        assert_eq!(bg.x, 0.0);
    }
}
