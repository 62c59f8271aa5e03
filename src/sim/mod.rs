//! Session simulation module
//!
//! All gameplay decisions live here. This module must stay engine-agnostic:
//! - Events in (`HostEvent` or the named handlers)
//! - Commands out (`Presentation`)
//! - Seeded RNG only
//! - No rendering, physics or platform dependencies

pub mod controller;
pub mod presentation;
pub mod ramp;
pub mod state;
pub mod timer;

pub use controller::{GameController, Hit, HostEvent};
pub use presentation::{Command, CommandLog, Presentation};
pub use ramp::{RampOutcome, SpawnRamp};
pub use state::{Enemy, EnemyKind, EntityId, GamePhase, Session, SpawnRequest};
pub use timer::RepeatingTimer;
