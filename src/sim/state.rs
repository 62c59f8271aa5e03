//! Session state and entity types
//!
//! Everything the controller mutates lives here. Nothing is persisted; the
//! serde derives exist so a host can dump a snapshot into its logs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player alive, enemies spawning, score counting
    Playing,
    /// Player destroyed; waiting for a restart tap
    GameOver,
}

/// Opaque entity handle shared with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved for the player sprite
    pub const PLAYER: EntityId = EntityId(0);
}

/// Enemy sprite types. Purely cosmetic; all kinds move the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Ball,
    Hammer,
    Tv,
}

impl EnemyKind {
    /// Every kind the spawner draws from
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Ball, EnemyKind::Hammer, EnemyKind::Tv];

    /// Asset name the host loads for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Ball => "ball",
            EnemyKind::Hammer => "hammer",
            EnemyKind::Tv => "tv",
        }
    }
}

/// A single enemy handed to the host for spawning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians per second
    pub angular_velocity: f32,
    /// Always zero: motion and spin never decay
    pub linear_damping: f32,
    pub angular_damping: f32,
}

/// A live enemy tracked for the off-screen sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Enemy {
    pub fn from_request(request: &SpawnRequest) -> Self {
        Self {
            id: request.id,
            kind: request.kind,
            pos: request.position,
            vel: request.velocity,
        }
    }

    /// Move along the (undamped, gravity-free) trajectory
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Per-run session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Frames survived
    pub score: u64,
    pub phase: GamePhase,
    /// Interval the spawn timer is armed at (seconds)
    pub spawn_interval_secs: f32,
    /// Spawns since the last ramp step
    pub enemies_since_ramp_check: u32,
    /// Player vertical position (always within the drag margins)
    pub player_y: f32,
    pub is_dragging: bool,
    /// "GAME OVER" / "New Game" labels are on screen
    pub has_overlay: bool,
    /// Player sprite is in the scene
    pub player_alive: bool,
}

impl Session {
    /// Fresh session at the start of a run
    pub fn new(initial_interval: f32, player_y: f32) -> Self {
        Self {
            score: 0,
            phase: GamePhase::Playing,
            spawn_interval_secs: initial_interval,
            enemies_since_ramp_check: 0,
            player_y,
            is_dragging: false,
            has_overlay: false,
            player_alive: true,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_playing() {
        let session = Session::new(1.0, 384.0);
        assert!(session.is_playing());
        assert_eq!(session.score, 0);
        assert_eq!(session.enemies_since_ramp_check, 0);
        assert!(session.player_alive);
        assert!(!session.has_overlay);
    }

    #[test]
    fn test_enemy_advance_is_undamped() {
        let mut enemy = Enemy {
            id: EntityId(7),
            kind: EnemyKind::Tv,
            pos: Vec2::new(1200.0, 300.0),
            vel: Vec2::new(-500.0, 0.0),
        };
        for _ in 0..10 {
            enemy.advance(0.1);
        }
        assert!((enemy.pos.x - 700.0).abs() < 1e-3);
        assert_eq!(enemy.pos.y, 300.0);
        assert_eq!(enemy.vel, Vec2::new(-500.0, 0.0));
    }

    #[test]
    fn test_enemy_kind_names() {
        let names: Vec<_> = EnemyKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["ball", "hammer", "tv"]);
    }
}
