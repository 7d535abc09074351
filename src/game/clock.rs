//! Frame clock
//!
//! By default the simulation advances once per displayed frame, using the
//! real elapsed time for timers and animations. With a fixed step configured,
//! elapsed time is accumulated and the simulation runs zero or more whole
//! steps per displayed frame.

/// Longest gap fed into the accumulator (e.g. after the window was hidden)
pub const MAX_ELAPSED_MS: f32 = 250.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    fixed_step_ms: Option<f32>,
    accumulator_ms: f32,
}

impl FrameClock {
    pub fn new(fixed_step_ms: Option<f32>) -> Self {
        Self {
            fixed_step_ms: fixed_step_ms.filter(|s| *s > 0.0),
            accumulator_ms: 0.0,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed_step_ms.is_some()
    }

    /// Number of simulation steps to run for a displayed frame that took
    /// `elapsed_ms`, and the delta each step should see
    pub fn advance(&mut self, elapsed_ms: f32) -> (u32, f32) {
        let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };
        match self.fixed_step_ms {
            None => (1, elapsed_ms),
            Some(step) => {
                self.accumulator_ms += elapsed_ms.min(MAX_ELAPSED_MS);
                let mut steps = 0;
                while self.accumulator_ms >= step {
                    self.accumulator_ms -= step;
                    steps += 1;
                }
                (steps, step)
            }
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}
