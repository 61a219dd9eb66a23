//! Fixed-step simulation clock
//!
//! Frame time is fed into an accumulator and drained in whole ticks, so
//! movement speed doesn't depend on the display's frame rate.

/// Longest frame we account for. Anything beyond (window drag, breakpoint)
/// is dropped instead of fast-forwarded.
pub const MAX_FRAME_DT: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct FixedClock {
    accumulator: f64,
    step: f64,
    max_ticks_per_frame: u32,
}

impl FixedClock {
    pub fn new(tick_rate: u32, max_ticks_per_frame: u32) -> Self {
        Self {
            accumulator: 0.0,
            step: 1.0 / tick_rate.max(1) as f64,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add `frame_dt` seconds and return how many ticks to run now.
    /// Backlog past the per-frame cap is discarded.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
