//! Spawn timers
//!
//! A spawn timer accumulates frame time and fires once it has exceeded a base
//! interval plus a random extra delay. Firing re-rolls the extra delay and
//! restarts the timer at zero, so waves arrive irregularly.

use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    /// Milliseconds accumulated since the last spawn
    pub timer_ms: f32,
    pub interval_ms: f32,
    /// Extra delay for the current wait, rolled in `jitter_min_ms..jitter_max_ms`
    pub jitter_ms: f32,
    pub jitter_min_ms: f32,
    pub jitter_max_ms: f32,
}

impl SpawnTimer {
    pub fn new<R: Rng>(interval_ms: f32, jitter_min_ms: f32, jitter_max_ms: f32, rng: &mut R) -> Self {
        let mut timer = Self {
            timer_ms: 0.0,
            interval_ms,
            jitter_ms: 0.0,
            jitter_min_ms,
            jitter_max_ms,
        };
        timer.roll_jitter(rng);
        timer
    }

    fn roll_jitter<R: Rng>(&mut self, rng: &mut R) {
        self.jitter_ms = if self.jitter_max_ms > self.jitter_min_ms {
            rng.gen_range(self.jitter_min_ms..self.jitter_max_ms)
        } else {
            self.jitter_min_ms
        };
    }

    /// Wait currently required before the next spawn
    pub fn threshold_ms(&self) -> f32 {
        self.interval_ms + self.jitter_ms
    }

    /// Advance by one frame. Returns true if a spawn is due this frame.
    ///
    /// Either the timer was past its threshold (spawn, timer back to zero,
    /// new jitter) or it was not (no spawn, `dt_ms` added). Never both.
    pub fn tick<R: Rng>(&mut self, dt_ms: f32, rng: &mut R) -> bool {
        if self.timer_ms > self.threshold_ms() {
            self.roll_jitter(rng);
            self.timer_ms = 0.0;
            true
        } else {
            self.timer_ms += dt_ms;
            false
        }
    }

    /// Back to a fresh wait (used on restart)
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.timer_ms = 0.0;
        self.roll_jitter(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_jitter_within_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let timer = SpawnTimer::new(1000.0, 500.0, 1500.0, &mut rng);
            assert!(timer.jitter_ms >= 500.0 && timer.jitter_ms < 1500.0);
        }
    }

    #[test]
    fn test_spawn_xor_accumulate() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut timer = SpawnTimer::new(1000.0, 500.0, 1500.0, &mut rng);
        let mut spawns = 0;

        for _ in 0..2000 {
            let before = timer.timer_ms;
            let due = before > timer.threshold_ms();
            let spawned = timer.tick(16.0, &mut rng);
            assert_eq!(spawned, due, "spawn must match the timer comparison");
            if spawned {
                spawns += 1;
                assert_eq!(timer.timer_ms, 0.0, "timer resets on spawn");
            } else {
                assert_eq!(timer.timer_ms, before + 16.0, "timer only accumulates without spawn");
            }
        }
        // 32s of frames with 1.5s..2.5s waits
        assert!(spawns >= 12 && spawns <= 22, "got {} spawns", spawns);
    }

    #[test]
    fn test_fixed_jitter_when_range_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut timer = SpawnTimer::new(100.0, 50.0, 50.0, &mut rng);
        assert_eq!(timer.threshold_ms(), 150.0);
        // 16ms frames: 10 accumulations reach 160 > 150, the 11th call spawns
        let mut frames = 0;
        while !timer.tick(16.0, &mut rng) {
            frames += 1;
        }
        assert_eq!(frames, 10);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut timer = SpawnTimer::new(1000.0, 500.0, 1500.0, &mut rng);
        timer.tick(700.0, &mut rng);
        timer.reset(&mut rng);
        assert_eq!(timer.timer_ms, 0.0);
    }
}
