//! Jetpack Runner - a side-scrolling corridor simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, episode state)
//! - `env`: Reset/step/render/close environment contract for players and agents
//! - `render`: Read-only presentation of simulation snapshots
//! - `config`: Simulation options and validation
//! - `policy`: Built-in action policies for headless play
//! - `highscores`: Leaderboard of finished episodes

pub mod config;
pub mod env;
pub mod error;
pub mod highscores;
pub mod policy;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use env::{Env, JetpackEnv, Step};
pub use error::{SimError, SimResult};
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Corridor defaults
    pub const DEFAULT_CORRIDOR_HEIGHT: u32 = 64;
    pub const DEFAULT_CORRIDOR_WIDTH: u32 = 64;
    /// Smallest corridor every obstacle shape and the coin block fit into
    pub const MIN_CORRIDOR_HEIGHT: u32 = 5;
    pub const MIN_CORRIDOR_WIDTH: u32 = 3;
    pub const MAX_CORRIDOR_DIM: u32 = 4096;

    /// Episode ends once distance traveled exceeds this
    pub const DEFAULT_DISTANCE_LIMIT: u32 = 1200;

    /// Queue sizing
    pub const DEFAULT_QUEUE_FLOOR: u32 = 3;
    pub const DEFAULT_QUEUE_CAP: u32 = 10;
    /// One in this many steps appends an extra entity to a queue below the cap
    pub const SPAWN_ODDS: u32 = 4;

    /// Rewards
    pub const COIN_REWARD: i32 = 1;
    pub const OBSTACLE_PENALTY: i32 = -5;

    /// Number of coin and obstacle slots in an observation
    pub const OBSERVED_ENTITIES: usize = 3;
    /// Cells per observation slot
    pub const COIN_CELLS: usize = 9;
    pub const OBSTACLE_CELLS: usize = 7;

    /// Pixel size of one corridor cell
    pub const CELL_SIZE: f32 = 8.0;
}
