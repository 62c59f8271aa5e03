//! Space Dodge headless runner
//!
//! Drives a session at a fixed timestep with a scripted crash and restart, and
//! logs what the controller asked the host to do. Useful for checking tuning
//! files without a renderer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use space_dodge::Tuning;
use space_dodge::consts::SIM_DT;
use space_dodge::sim::{EntityId, GameController, HostEvent, Presentation, RepeatingTimer, SpawnRequest};

#[derive(Parser)]
#[command(name = "space-dodge")]
#[command(about = "Run a headless Space Dodge session and report the spawn ramp")]
struct Args {
    /// Seconds of simulated play
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Trigger a collision at this time, then tap restart one second later
    #[arg(long)]
    crash_at: Option<f32>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tuning JSON (missing keys use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Stand-in host: a repeating timer plus counters instead of a scene graph
#[derive(Default)]
struct HeadlessScene {
    timer: RepeatingTimer,
    spawned: u32,
    removed: u32,
    explosions: u32,
    score_text: String,
    overlay: bool,
}

impl Presentation for HeadlessScene {
    fn spawn_starfield(&mut self, position: Vec2, prewarm_secs: f32) {
        log::debug!("starfield at {:?} (prewarm {}s)", position, prewarm_secs);
    }

    fn spawn_player(&mut self, _id: EntityId, position: Vec2) {
        log::debug!("player at {:?}", position);
    }

    fn spawn_enemy(&mut self, _request: &SpawnRequest) {
        self.spawned += 1;
    }

    fn remove_entity(&mut self, _id: EntityId) {
        self.removed += 1;
    }

    fn move_player(&mut self, _position: Vec2) {}

    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn show_game_over_overlay(&mut self) {
        self.overlay = true;
    }

    fn hide_game_over_overlay(&mut self) {
        self.overlay = false;
    }

    fn play_explosion(&mut self, position: Vec2) {
        self.explosions += 1;
        log::info!("Explosion at ({:.0}, {:.0})", position.x, position.y);
    }

    fn arm_timer(&mut self, interval_secs: f32) {
        self.timer.arm(interval_secs);
    }

    fn disarm_timer(&mut self) {
        self.timer.disarm();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(args.seconds > 0.0, "--seconds must be > 0");

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    log::info!("Space Dodge (headless) starting with seed {}", args.seed);

    let mut game = GameController::new(HeadlessScene::default(), tuning, args.seed);
    game.start();

    let total_frames = (args.seconds / SIM_DT).round() as u64;
    let crash_frame = args.crash_at.map(|t| (t / SIM_DT).round() as u64);
    let restart_frame = crash_frame.map(|f| f + (1.0 / SIM_DT).round() as u64);

    for frame in 0..total_frames {
        game.presentation_mut().timer.accumulate(SIM_DT);
        // One fire at a time: a ramp re-arm inside the handler resets the timer
        while game.presentation_mut().timer.poll() {
            game.handle(HostEvent::SpawnTimerFired);
        }
        game.handle(HostEvent::Tick { dt: SIM_DT });

        if Some(frame) == crash_frame {
            game.handle(HostEvent::CollisionDetected);
        }
        if Some(frame) == restart_frame {
            let point = game.tuning().restart_button_center;
            let hit = game.hit_test(point);
            game.handle(HostEvent::TouchBegan { point, hit });
        }
    }

    let scene = game.presentation();
    log::info!(
        "Finished: {} | spawned {} | removed {} | explosions {} | overlay {}",
        scene.score_text,
        scene.spawned,
        scene.removed,
        scene.explosions,
        scene.overlay
    );
    let snapshot = serde_json::to_string(game.session()).context("serializing session")?;
    log::info!("Session: {}", snapshot);

    Ok(())
}
