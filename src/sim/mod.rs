//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per call
//! - Seeded, owned RNG only
//! - Stable queue order (nearest entity first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod grid;
pub mod observe;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, detect};
pub use entity::{CoinSlot, Entity, EntityKind, ObstacleShape, ObstacleSlot};
pub use grid::{Cell, Corridor};
pub use observe::Observation;
pub use spawn::{gen_coin, gen_obstacle};
pub use state::{EpisodePhase, GameState, QueueKind, Snapshot, StepResult, Termination};
pub use tick::{Action, StepOutcome, tick};
