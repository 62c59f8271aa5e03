//! Game session controller
//!
//! Owns the Playing/GameOver state machine, the spawn ramp and the score, and
//! turns host events into [`Session`] mutations plus [`Presentation`] calls.
//! Events are processed one at a time; nothing here blocks or re-enters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::presentation::Presentation;
use super::ramp::{RampOutcome, SpawnRamp};
use super::state::{Enemy, EnemyKind, EntityId, GamePhase, Session, SpawnRequest};
use crate::tuning::Tuning;
use crate::{point_in_rect, score_label};

/// What a touch landed on, as reported by the host's hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Player,
    /// The "New Game" label on the game-over overlay
    Restart,
    Nothing,
}

/// Inbound events from the host engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// One rendered frame
    Tick { dt: f32 },
    SpawnTimerFired,
    TouchBegan { point: Vec2, hit: Hit },
    TouchMoved { point: Vec2 },
    TouchEnded { point: Vec2 },
    /// Physics contact involving the player
    CollisionDetected,
}

/// Session controller bound to a presentation backend
pub struct GameController<P: Presentation> {
    presentation: P,
    tuning: Tuning,
    session: Session,
    ramp: SpawnRamp,
    rng: Pcg32,
    /// Live enemies, in spawn (id) order
    enemies: Vec<Enemy>,
    next_id: u32,
    timer_armed: bool,
    scene_ready: bool,
    started: bool,
}

impl<P: Presentation> GameController<P> {
    /// Create a controller. Call [`start`](Self::start) to begin the first run.
    pub fn new(presentation: P, tuning: Tuning, seed: u64) -> Self {
        let session = Session::new(tuning.initial_spawn_interval, tuning.player_home.y);
        let ramp = SpawnRamp::new(&tuning);
        Self {
            presentation,
            tuning,
            session,
            ramp,
            rng: Pcg32::seed_from_u64(seed),
            enemies: Vec::new(),
            next_id: EntityId::PLAYER.0 + 1,
            timer_armed: false,
            scene_ready: false,
            started: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// Current player position (x never leaves home)
    pub fn player_position(&self) -> Vec2 {
        Vec2::new(self.tuning.player_home.x, self.session.player_y)
    }

    /// Begin a run, or reset the current one
    pub fn start(&mut self) {
        if !self.scene_ready {
            self.presentation.spawn_starfield(
                self.tuning.starfield_position,
                self.tuning.starfield_prewarm_secs,
            );
            self.scene_ready = true;
        }

        if self.started {
            self.clear_enemies();
            if self.session.has_overlay {
                self.presentation.hide_game_over_overlay();
            }
        }

        let was_alive = self.started && self.session.player_alive;
        self.session = Session::new(self.tuning.initial_spawn_interval, self.tuning.player_home.y);
        self.ramp.reset();
        self.started = true;

        let home = self.player_position();
        if was_alive {
            self.presentation.move_player(home);
        } else {
            self.presentation.spawn_player(EntityId::PLAYER, home);
        }
        self.push_score();
        self.arm_timer(self.ramp.interval());

        log::info!("Session started (spawn interval {:.2}s)", self.session.spawn_interval_secs);
    }

    /// Route a host event to its handler
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Tick { dt } => self.on_tick(dt),
            HostEvent::SpawnTimerFired => self.on_spawn_timer_fire(),
            HostEvent::TouchBegan { hit, .. } => match self.session.phase {
                GamePhase::GameOver => self.on_tap_restart(hit),
                GamePhase::Playing => self.on_player_drag_start(hit),
            },
            HostEvent::TouchMoved { point } => self.on_player_drag(point),
            HostEvent::TouchEnded { .. } => self.on_player_drag_end(),
            HostEvent::CollisionDetected => self.on_collision(),
        }
    }

    /// Per-frame update: score while playing, sweep enemies that left the screen
    pub fn on_tick(&mut self, dt: f32) {
        self.sweep_offscreen(dt);

        if self.session.is_game_over() {
            return;
        }
        self.session.score += 1;
        self.push_score();
    }

    /// Spawn one enemy and step the cadence every `spawns_per_ramp` spawns
    pub fn on_spawn_timer_fire(&mut self) {
        if self.session.is_game_over() {
            return;
        }

        let request = self.roll_spawn();
        self.presentation.spawn_enemy(&request);
        self.enemies.push(Enemy::from_request(&request));
        log::debug!(
            "Spawned {} #{} at y={:.0}",
            request.kind.as_str(),
            request.id.0,
            request.position.y
        );

        match self.ramp.record_spawn() {
            RampOutcome::Counted => {}
            RampOutcome::Stepped { interval, changed } => {
                self.arm_timer(interval);
                if changed {
                    log::info!("Spawn interval now {:.2}s", interval);
                }
            }
        }
        self.session.spawn_interval_secs = self.ramp.interval();
        self.session.enemies_since_ramp_check = self.ramp.counter();
    }

    pub fn on_player_drag_start(&mut self, hit: Hit) {
        if hit == Hit::Player && self.session.player_alive {
            self.session.is_dragging = true;
        }
    }

    /// Vertical-only drag, clamped to the playfield margins
    pub fn on_player_drag(&mut self, location: Vec2) {
        if !self.session.is_dragging || !self.session.player_alive {
            return;
        }
        if !location.y.is_finite() {
            return;
        }
        self.session.player_y = self.tuning.clamp_player_y(location.y);
        let pos = self.player_position();
        self.presentation.move_player(pos);
    }

    pub fn on_player_drag_end(&mut self) {
        self.session.is_dragging = false;
    }

    pub fn on_tap_restart(&mut self, hit: Hit) {
        if self.session.is_game_over() && hit == Hit::Restart {
            log::info!("Restart tapped");
            self.start();
        }
    }

    /// Player hit something. Only the first contact of a run counts.
    pub fn on_collision(&mut self) {
        if !self.session.is_playing() {
            return;
        }

        self.session.phase = GamePhase::GameOver;
        self.disarm_timer();

        let last_pos = self.player_position();
        self.presentation.play_explosion(last_pos);
        self.presentation.remove_entity(EntityId::PLAYER);
        self.session.player_alive = false;
        self.session.is_dragging = false;

        self.presentation.show_game_over_overlay();
        self.session.has_overlay = true;

        log::info!("Game over with score {}", self.session.score);
    }

    /// Fallback hit test for hosts without per-node hit testing
    pub fn hit_test(&self, point: Vec2) -> Hit {
        if self.session.has_overlay
            && point_in_rect(
                point,
                self.tuning.restart_button_center,
                self.tuning.restart_button_half_extents,
            )
        {
            return Hit::Restart;
        }
        if self.session.player_alive
            && point_in_rect(point, self.player_position(), self.tuning.player_half_extents)
        {
            return Hit::Player;
        }
        Hit::Nothing
    }

    fn roll_spawn(&mut self) -> SpawnRequest {
        let kind = EnemyKind::ALL[self.rng.random_range(0..EnemyKind::ALL.len())];
        let y = self
            .rng
            .random_range(self.tuning.enemy_min_spawn_y..=self.tuning.enemy_max_spawn_y);
        let id = EntityId(self.next_id);
        self.next_id += 1;

        SpawnRequest {
            id,
            kind,
            position: Vec2::new(self.tuning.enemy_spawn_x, y),
            velocity: Vec2::new(-self.tuning.enemy_speed, 0.0),
            angular_velocity: self.tuning.enemy_angular_velocity,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    fn sweep_offscreen(&mut self, dt: f32) {
        let despawn_x = self.tuning.despawn_x;
        let presentation = &mut self.presentation;
        self.enemies.retain_mut(|enemy| {
            enemy.advance(dt);
            if enemy.pos.x <= despawn_x {
                presentation.remove_entity(enemy.id);
                log::debug!("Swept {} #{}", enemy.kind.as_str(), enemy.id.0);
                false
            } else {
                true
            }
        });
    }

    fn clear_enemies(&mut self) {
        for enemy in self.enemies.drain(..) {
            self.presentation.remove_entity(enemy.id);
        }
    }

    fn push_score(&mut self) {
        self.presentation.set_score_text(&score_label(self.session.score));
    }

    /// At most one timer runs; any previous one is disarmed first
    fn arm_timer(&mut self, interval: f32) {
        self.disarm_timer();
        self.presentation.arm_timer(interval);
        self.timer_armed = true;
    }

    fn disarm_timer(&mut self) {
        if self.timer_armed {
            self.presentation.disarm_timer();
            self.timer_armed = false;
        }
    }
}
