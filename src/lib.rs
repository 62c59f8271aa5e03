//! Space Dodge - a side-scrolling dodge arcade game
//!
//! Core modules:
//! - `sim`: Session state machine, spawn ramp, presentation commands
//! - `tuning`: Data-driven game balance
//!
//! Rendering, physics and touch delivery belong to the host engine. The crate
//! only decides *what* happens and tells the host through [`sim::Presentation`].

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation timestep used by headless hosts (60 Hz, one score point per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1024.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Spawn cadence
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.1;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.1;
    /// Spawns between two ramp steps
    pub const SPAWNS_PER_RAMP: u32 = 20;

    /// Enemies enter from beyond the right edge and fly left
    pub const ENEMY_SPAWN_X: f32 = 1200.0;
    pub const ENEMY_MIN_SPAWN_Y: f32 = 50.0;
    pub const ENEMY_MAX_SPAWN_Y: f32 = 736.0;
    pub const ENEMY_SPEED: f32 = 500.0;
    /// Radians per second
    pub const ENEMY_ANGULAR_VELOCITY: f32 = 5.0;
    /// Anything at or past this x is swept
    pub const DESPAWN_X: f32 = -300.0;

    /// Player
    pub const PLAYER_HOME_X: f32 = 100.0;
    pub const PLAYER_HOME_Y: f32 = 384.0;
    pub const PLAYER_MIN_Y: f32 = 100.0;
    pub const PLAYER_MAX_Y: f32 = 668.0;
    /// Half extents of the player sprite, for fallback hit testing
    pub const PLAYER_HALF_WIDTH: f32 = 44.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 20.0;

    /// "New Game" label under the "GAME OVER" text
    pub const RESTART_BUTTON_X: f32 = 512.0;
    pub const RESTART_BUTTON_Y: f32 = 300.0;
    pub const RESTART_BUTTON_HALF_WIDTH: f32 = 120.0;
    pub const RESTART_BUTTON_HALF_HEIGHT: f32 = 30.0;

    /// Background starfield emitter, prewarmed so the screen starts full
    pub const STARFIELD_X: f32 = 1024.0;
    pub const STARFIELD_Y: f32 = 384.0;
    pub const STARFIELD_PREWARM_SECS: f32 = 10.0;
}

/// Axis-aligned rectangle test around a center point
#[inline]
pub fn point_in_rect(point: Vec2, center: Vec2, half_extents: Vec2) -> bool {
    let d = (point - center).abs();
    d.x <= half_extents.x && d.y <= half_extents.y
}

/// Score label text shown by the HUD
#[inline]
pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_rect_edges() {
        let center = Vec2::new(100.0, 384.0);
        let half = Vec2::new(44.0, 20.0);
        assert!(point_in_rect(center, center, half));
        assert!(point_in_rect(Vec2::new(144.0, 404.0), center, half));
        assert!(!point_in_rect(Vec2::new(145.0, 384.0), center, half));
        assert!(!point_in_rect(Vec2::new(100.0, 363.0), center, half));
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(1234), "Score: 1234");
    }
}
