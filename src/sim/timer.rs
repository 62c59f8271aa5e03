//! Repeating timer driven by frame deltas
//!
//! For hosts without a native scheduled timer. Fires are counted against the
//! accumulated time, the same way the fixed-step loop consumes its accumulator.

/// Accumulator-based repeating timer
#[derive(Debug, Clone, Default)]
pub struct RepeatingTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) with a new interval. Elapsed time starts from zero.
    pub fn arm(&mut self, interval_secs: f32) {
        self.interval = interval_secs;
        self.elapsed = 0.0;
        self.armed = interval_secs > 0.0;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Add frame time without consuming any fires
    pub fn accumulate(&mut self, dt: f32) {
        if self.armed {
            self.elapsed += dt;
        }
    }

    /// Consume a single fire if one is due
    ///
    /// Callers dispatch each fire before polling again, so a re-arm from a
    /// fire handler drops whatever the old interval still owed.
    pub fn poll(&mut self) -> bool {
        if self.armed && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }

    /// Advance by `dt` and return how many times the timer fired
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulate(dt);
        let mut fires = 0;
        while self.poll() {
            fires += 1;
        }
        fires
    }
}
