//! Data-driven game balance
//!
//! Every number the session controller uses lives here so a host can ship a
//! JSON file instead of recompiling. Missing keys fall back to `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawn ramp ===
    /// Interval armed on start/restart (seconds)
    pub initial_spawn_interval: f32,
    /// Floor the ramp never goes below (seconds)
    pub min_spawn_interval: f32,
    /// Amount shaved off the interval on each ramp step (seconds)
    pub spawn_interval_step: f32,
    /// Spawns between ramp steps
    pub spawns_per_ramp: u32,

    // === Enemies ===
    pub enemy_spawn_x: f32,
    pub enemy_min_spawn_y: f32,
    pub enemy_max_spawn_y: f32,
    /// Leftward speed (units/sec)
    pub enemy_speed: f32,
    /// Spin (rad/sec)
    pub enemy_angular_velocity: f32,
    pub despawn_x: f32,

    // === Player ===
    pub player_home: Vec2,
    pub player_min_y: f32,
    pub player_max_y: f32,
    pub player_half_extents: Vec2,

    // === Overlay / background ===
    pub restart_button_center: Vec2,
    pub restart_button_half_extents: Vec2,
    pub starfield_position: Vec2,
    pub starfield_prewarm_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            spawns_per_ramp: SPAWNS_PER_RAMP,

            enemy_spawn_x: ENEMY_SPAWN_X,
            enemy_min_spawn_y: ENEMY_MIN_SPAWN_Y,
            enemy_max_spawn_y: ENEMY_MAX_SPAWN_Y,
            enemy_speed: ENEMY_SPEED,
            enemy_angular_velocity: ENEMY_ANGULAR_VELOCITY,
            despawn_x: DESPAWN_X,

            player_home: Vec2::new(PLAYER_HOME_X, PLAYER_HOME_Y),
            player_min_y: PLAYER_MIN_Y,
            player_max_y: PLAYER_MAX_Y,
            player_half_extents: Vec2::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),

            restart_button_center: Vec2::new(RESTART_BUTTON_X, RESTART_BUTTON_Y),
            restart_button_half_extents: Vec2::new(
                RESTART_BUTTON_HALF_WIDTH,
                RESTART_BUTTON_HALF_HEIGHT,
            ),
            starfield_position: Vec2::new(STARFIELD_X, STARFIELD_Y),
            starfield_prewarm_secs: STARFIELD_PREWARM_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the controller cannot honor
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.min_spawn_interval.is_nan() || self.min_spawn_interval <= 0.0 {
            return Err(TuningError::Invalid(format!(
                "min_spawn_interval must be > 0 (got {})",
                self.min_spawn_interval
            )));
        }
        if self.initial_spawn_interval < self.min_spawn_interval {
            return Err(TuningError::Invalid(format!(
                "initial_spawn_interval {} is below min_spawn_interval {}",
                self.initial_spawn_interval, self.min_spawn_interval
            )));
        }
        if self.spawn_interval_step < 0.0 {
            return Err(TuningError::Invalid(
                "spawn_interval_step must not be negative".into(),
            ));
        }
        if self.spawns_per_ramp == 0 {
            return Err(TuningError::Invalid("spawns_per_ramp must be > 0".into()));
        }
        if self.enemy_min_spawn_y > self.enemy_max_spawn_y {
            return Err(TuningError::Invalid(format!(
                "enemy spawn y range is inverted ({} > {})",
                self.enemy_min_spawn_y, self.enemy_max_spawn_y
            )));
        }
        if self.player_min_y > self.player_max_y {
            return Err(TuningError::Invalid(format!(
                "player y range is inverted ({} > {})",
                self.player_min_y, self.player_max_y
            )));
        }
        Ok(())
    }

    /// Clamp a requested player y into the playfield margins
    pub fn clamp_player_y(&self, y: f32) -> f32 {
        y.clamp(self.player_min_y, self.player_max_y)
    }
}
