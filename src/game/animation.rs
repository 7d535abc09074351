//! Sprite sheet animation state
//!
//! Sprite sheets are laid out as one row of equally sized cells. An animation
//! only tracks which cell is current; the renderer turns that into a source
//! rectangle.

/// Next cell index, wrapping to 0 after `max_frame`
fn next_frame(frame: u32, max_frame: u32) -> u32 {
    if frame >= max_frame {
        0
    } else {
        frame + 1
    }
}

/// Time-driven animation (advances at a fixed rate in frames per second)
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    /// Current column in the sprite sheet
    pub frame: u32,
    /// Current row in the sprite sheet
    pub row: u32,
    pub max_frame: u32,
    /// Milliseconds accumulated since the last frame change
    pub timer_ms: f32,
    /// Milliseconds between frame changes
    pub interval_ms: f32,
}

impl SpriteAnimation {
    pub fn new(start_frame: u32, max_frame: u32, fps: f32) -> Self {
        Self {
            frame: start_frame.min(max_frame),
            row: 0,
            max_frame,
            timer_ms: 0.0,
            interval_ms: 1000.0 / fps,
        }
    }

    /// Advance by `dt_ms`. The frame changes on the first call after the
    /// timer has exceeded the interval, and the timer then restarts from zero.
    pub fn advance(&mut self, dt_ms: f32) {
        if self.timer_ms > self.interval_ms {
            self.frame = next_frame(self.frame, self.max_frame);
            self.timer_ms = 0.0;
        } else {
            self.timer_ms += dt_ms;
        }
    }
}

/// Frame-counter-driven animation: changes cell every `cadence` simulated frames
#[derive(Debug, Clone, PartialEq)]
pub struct FlapAnimation {
    pub frame: u32,
    pub max_frame: u32,
    /// Simulated frames per cell (at least 1)
    pub cadence: u32,
}

impl FlapAnimation {
    pub fn new(max_frame: u32, cadence: u32) -> Self {
        Self {
            frame: 0,
            max_frame,
            cadence: cadence.max(1),
        }
    }

    pub fn advance(&mut self, frame_counter: u64) {
        if frame_counter % self.cadence as u64 == 0 {
            self.frame = next_frame(self.frame, self.max_frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_animation_waits_for_interval() {
        // 20 fps -> 50ms per frame
        let mut anim = SpriteAnimation::new(0, 5, 20.0);
        anim.advance(16.0);
        anim.advance(16.0);
        anim.advance(16.0);
        assert_eq!(anim.frame, 0, "48ms is not past the interval yet");
        anim.advance(16.0); // timer 64 -> still accumulating on this call
        assert_eq!(anim.frame, 0);
        anim.advance(16.0); // timer > interval -> flip
        assert_eq!(anim.frame, 1);
        assert_eq!(anim.timer_ms, 0.0);
    }

    #[test]
    fn test_sprite_animation_wraps_after_max() {
        let mut anim = SpriteAnimation::new(8, 8, 20.0);
        anim.timer_ms = 51.0;
        anim.advance(16.0);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_start_frame_clamped() {
        let anim = SpriteAnimation::new(12, 8, 20.0);
        assert_eq!(anim.frame, 8);
    }

    #[test]
    fn test_flap_animation_cadence() {
        let mut flap = FlapAnimation::new(5, 3);
        for counter in 1..=6u64 {
            flap.advance(counter);
        }
        // Only counters 3 and 6 advance
        assert_eq!(flap.frame, 2);
    }

    #[test]
    fn test_flap_animation_zero_cadence_is_every_frame() {
        let mut flap = FlapAnimation::new(5, 0);
        for counter in 0..6u64 {
            flap.advance(counter);
        }
        assert_eq!(flap.frame, 0, "six advances through 0..=5 wrap back to 0");
    }
}
