//! Simulation configuration
//!
//! Loaded from JSON (all fields optional) or built in code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::Corridor;

/// Options recognized when building a simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Corridor rows
    pub corridor_height: u32,
    /// Corridor columns
    pub corridor_width: u32,
    /// Episode terminates once distance traveled exceeds this
    pub distance_limit: u32,
    /// Minimum coin queue length after each step
    pub coin_queue_floor: u32,
    /// Minimum obstacle queue length after each step
    pub obstacle_queue_floor: u32,
    /// Probabilistic spawning only tops a queue up while it is shorter than this
    pub queue_cap: u32,
    /// Seed for procedural generation (drawn at random when absent)
    pub random_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            corridor_height: DEFAULT_CORRIDOR_HEIGHT,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            distance_limit: DEFAULT_DISTANCE_LIMIT,
            coin_queue_floor: DEFAULT_QUEUE_FLOOR,
            obstacle_queue_floor: DEFAULT_QUEUE_FLOOR,
            queue_cap: DEFAULT_QUEUE_CAP,
            random_seed: None,
        }
    }
}

impl SimConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Corridor described by this config
    pub fn corridor(&self) -> SimResult<Corridor> {
        Corridor::new(self.corridor_height, self.corridor_width)
    }

    /// Reject configurations no simulation can be built from
    pub fn validate(&self) -> SimResult<()> {
        self.corridor()?;
        if self.distance_limit == 0 {
            return Err(SimError::InvalidDistanceLimit);
        }
        for floor in [self.coin_queue_floor, self.obstacle_queue_floor] {
            if floor == 0 || floor > self.queue_cap {
                return Err(SimError::InvalidQueueFloor {
                    floor,
                    cap: self.queue_cap,
                });
            }
        }
        Ok(())
    }
}
