//! Outbound commands to the host engine
//!
//! The controller never renders or simulates physics. It calls into a
//! [`Presentation`] implementation, which the host backs with its scene graph,
//! physics world, emitters and timers.

use glam::Vec2;

use super::state::{EntityId, SpawnRequest};

/// Commands the session controller issues to the host
pub trait Presentation {
    /// Background particle emitter, advanced `prewarm_secs` before first frame
    fn spawn_starfield(&mut self, position: Vec2, prewarm_secs: f32);
    fn spawn_player(&mut self, id: EntityId, position: Vec2);
    /// Enemy with a physics body; the host applies the velocities as given
    fn spawn_enemy(&mut self, request: &SpawnRequest);
    fn remove_entity(&mut self, id: EntityId);
    fn move_player(&mut self, position: Vec2);
    fn set_score_text(&mut self, text: &str);
    /// "GAME OVER" plus the tappable "New Game" label
    fn show_game_over_overlay(&mut self);
    fn hide_game_over_overlay(&mut self);
    fn play_explosion(&mut self, position: Vec2);
    /// Start a repeating spawn timer; the controller disarms any previous one first
    fn arm_timer(&mut self, interval_secs: f32);
    fn disarm_timer(&mut self);
}

/// A recorded presentation call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SpawnStarfield { position: Vec2, prewarm_secs: f32 },
    SpawnPlayer { id: EntityId, position: Vec2 },
    SpawnEnemy(SpawnRequest),
    RemoveEntity(EntityId),
    MovePlayer(Vec2),
    SetScoreText(String),
    ShowGameOverOverlay,
    HideGameOverOverlay,
    PlayExplosion(Vec2),
    ArmTimer(f32),
    DisarmTimer,
}

/// Presentation backend that records every command
///
/// Handy for tests and for hosts that replay the stream later.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    pub commands: Vec<Command>,
    /// Interval of the currently armed timer
    pub armed_interval: Option<f32>,
    /// Arms issued while another timer was still running
    pub leaked_timers: u32,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping timer state
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }

    /// Spawn requests in issue order
    pub fn spawned_enemies(&self) -> impl Iterator<Item = &SpawnRequest> {
        self.commands.iter().filter_map(|c| match c {
            Command::SpawnEnemy(req) => Some(req),
            _ => None,
        })
    }

    pub fn removed(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::RemoveEntity(id) => Some(*id),
            _ => None,
        })
    }

    pub fn last_score_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::SetScoreText(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Presentation for CommandLog {
    fn spawn_starfield(&mut self, position: Vec2, prewarm_secs: f32) {
        self.commands.push(Command::SpawnStarfield {
            position,
            prewarm_secs,
        });
    }

    fn spawn_player(&mut self, id: EntityId, position: Vec2) {
        self.commands.push(Command::SpawnPlayer { id, position });
    }

    fn spawn_enemy(&mut self, request: &SpawnRequest) {
        self.commands.push(Command::SpawnEnemy(*request));
    }

    fn remove_entity(&mut self, id: EntityId) {
        self.commands.push(Command::RemoveEntity(id));
    }

    fn move_player(&mut self, position: Vec2) {
        self.commands.push(Command::MovePlayer(position));
    }

    fn set_score_text(&mut self, text: &str) {
        self.commands.push(Command::SetScoreText(text.to_string()));
    }

    fn show_game_over_overlay(&mut self) {
        self.commands.push(Command::ShowGameOverOverlay);
    }

    fn hide_game_over_overlay(&mut self) {
        self.commands.push(Command::HideGameOverOverlay);
    }

    fn play_explosion(&mut self, position: Vec2) {
        self.commands.push(Command::PlayExplosion(position));
    }

    fn arm_timer(&mut self, interval_secs: f32) {
        if self.armed_interval.is_some() {
            self.leaked_timers += 1;
        }
        self.armed_interval = Some(interval_secs);
        self.commands.push(Command::ArmTimer(interval_secs));
    }

    fn disarm_timer(&mut self) {
        self.armed_interval = None;
        self.commands.push(Command::DisarmTimer);
    }
}
