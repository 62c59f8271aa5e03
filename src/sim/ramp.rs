//! Spawn cadence ramp
//!
//! Step function: every `spawns_per_ramp` spawns the interval shrinks by
//! `step`, never dropping below `min`. Once at the floor the cadence stays put.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Spawn ramp parameters plus the current step count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRamp {
    initial: f32,
    min: f32,
    step: f32,
    spawns_per_ramp: u32,
    /// Ramp steps taken this session
    level: u32,
    /// Spawns since the last step
    counter: u32,
}

/// What a single spawn did to the cadence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampOutcome {
    /// Counter advanced, cadence unchanged
    Counted,
    /// Step boundary reached; `changed` is false once the floor is hit
    Stepped { interval: f32, changed: bool },
}

impl SpawnRamp {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            initial: tuning.initial_spawn_interval,
            min: tuning.min_spawn_interval,
            step: tuning.spawn_interval_step,
            spawns_per_ramp: tuning.spawns_per_ramp.max(1),
            level: 0,
            counter: 0,
        }
    }

    /// Back to the initial cadence
    pub fn reset(&mut self) {
        self.level = 0;
        self.counter = 0;
    }

    /// Current spawn interval (seconds)
    ///
    /// Computed from the step count rather than by repeated subtraction so
    /// long sessions do not accumulate float drift.
    pub fn interval(&self) -> f32 {
        (self.initial - self.step * self.level as f32).max(self.min)
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn at_floor(&self) -> bool {
        self.interval() <= self.min
    }

    /// Count one spawn and step the cadence on the boundary
    pub fn record_spawn(&mut self) -> RampOutcome {
        self.counter += 1;
        if self.counter < self.spawns_per_ramp {
            return RampOutcome::Counted;
        }

        self.counter = 0;
        let before = self.interval();
        if !self.at_floor() {
            self.level += 1;
        }
        let interval = self.interval();
        RampOutcome::Stepped {
            interval,
            changed: interval < before,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_ramp() -> SpawnRamp {
        SpawnRamp::new(&Tuning::default())
    }

    #[test]
    fn test_nineteen_spawns_keep_interval() {
        let mut ramp = default_ramp();
        for _ in 0..19 {
            assert_eq!(ramp.record_spawn(), RampOutcome::Counted);
        }
        assert_eq!(ramp.interval(), 1.0);
        assert_eq!(ramp.counter(), 19);
    }

    #[test]
    fn test_twentieth_spawn_steps_down() {
        let mut ramp = default_ramp();
        for _ in 0..19 {
            ramp.record_spawn();
        }
        match ramp.record_spawn() {
            RampOutcome::Stepped { interval, changed } => {
                assert!((interval - 0.9).abs() < 1e-6);
                assert!(changed);
            }
            other => panic!("expected a step, got {:?}", other),
        }
        assert_eq!(ramp.counter(), 0);
    }

    #[test]
    fn test_floor_is_sticky() {
        let mut ramp = default_ramp();
        // Ten steps take 1.0 down to the 0.1 floor (and then some)
        for _ in 0..(20 * 15) {
            ramp.record_spawn();
        }
        assert!(ramp.at_floor());
        assert!((ramp.interval() - 0.1).abs() < 1e-6);

        for _ in 0..19 {
            ramp.record_spawn();
        }
        match ramp.record_spawn() {
            RampOutcome::Stepped { interval, changed } => {
                assert!((interval - 0.1).abs() < 1e-6);
                assert!(!changed);
            }
            other => panic!("expected a step, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut ramp = default_ramp();
        for _ in 0..45 {
            ramp.record_spawn();
        }
        assert!(ramp.interval() < 1.0);
        assert_eq!(ramp.counter(), 5);
        ramp.reset();
        assert_eq!(ramp.interval(), 1.0);
        assert_eq!(ramp.counter(), 0);
    }

    proptest! {
        #[test]
        fn prop_interval_non_increasing_and_floored(spawns in 0usize..2000) {
            let mut ramp = default_ramp();
            let mut last = ramp.interval();
            for _ in 0..spawns {
                ramp.record_spawn();
                let now = ramp.interval();
                prop_assert!(now <= last);
                prop_assert!(now >= 0.1);
                last = now;
            }
        }

        #[test]
        fn prop_one_step_from_any_level(levels in 0u32..20) {
            let mut ramp = default_ramp();
            for _ in 0..(levels * 20) {
                ramp.record_spawn();
            }
            let before = ramp.interval();
            for _ in 0..20 {
                ramp.record_spawn();
            }
            let expected = (before - 0.1).max(0.1);
            prop_assert!((ramp.interval() - expected).abs() < 1e-5);
            prop_assert_eq!(ramp.counter(), 0);
        }
    }
}
