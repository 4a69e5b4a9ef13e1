//! Game state and core simulation types
//!
//! `GameState` exclusively owns the agent, both entity queues and the RNG
//! that feeds procedural generation.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::grid::{Cell, Corridor};
use super::observe::Observation;
use super::spawn::{gen_coin, gen_obstacle};
use super::tick::{Action, StepOutcome, tick};
use crate::config::SimConfig;
use crate::error::SimResult;

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Agent touched one of the nearest obstacles
    ObstacleHit,
    /// Distance traveled exceeded the configured limit
    DistanceLimit,
}

/// Episode lifecycle. There is no way back from `Terminated` except `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    Running,
    Terminated(Termination),
}

/// Which entity queue an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    Coins,
    Obstacles,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub corridor: Corridor,
    pub agent: Cell,
    pub coins: Vec<Entity>,
    pub obstacles: Vec<Entity>,
    pub score: u32,
    pub distance: u32,
    pub phase: EpisodePhase,
}

/// Result of a single `step`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: i32,
    pub terminated: bool,
}

/// Complete simulation state (the simulation core)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Corridor bounds
    pub corridor: Corridor,
    /// Agent position, always inside the corridor
    pub agent: Cell,
    /// Coins, nearest first
    pub coins: VecDeque<Entity>,
    /// Obstacles, nearest first
    pub obstacles: VecDeque<Entity>,
    /// Coins picked up this episode
    pub score: u32,
    /// Steps taken this episode
    pub distance: u32,
    /// Current phase
    pub phase: EpisodePhase,
    /// Seed of the current RNG stream
    pub seed: u64,
    pub(crate) rng: Pcg32,
    config: SimConfig,
}

impl GameState {
    /// Build a simulation from a validated config and reset it
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random::<u64>);
        let corridor = config.corridor()?;
        let mut state = Self {
            corridor,
            agent: corridor.start(),
            coins: VecDeque::with_capacity(config.queue_cap as usize),
            obstacles: VecDeque::with_capacity(config.queue_cap as usize),
            score: 0,
            distance: 0,
            phase: EpisodePhase::Running,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config: config.clone(),
        };
        state.restart();
        log::info!(
            "Simulation ready: {}x{} corridor, seed {}",
            corridor.height(),
            corridor.width(),
            seed
        );
        Ok(state)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Start a new episode. A seed restarts the RNG stream; `None` continues the current one.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.seed = seed;
            self.rng = Pcg32::seed_from_u64(seed);
        }
        self.restart();
        log::info!("Episode reset (seed {})", self.seed);
        self.observe()
    }

    fn restart(&mut self) {
        self.agent = self.corridor.start();
        self.coins.clear();
        self.obstacles.clear();
        self.push_fresh(QueueKind::Coins);
        self.push_fresh(QueueKind::Obstacles);
        self.score = 0;
        self.distance = 0;
        self.phase = EpisodePhase::Running;
    }

    /// Advance one step and observe the result
    pub fn step(&mut self, action: Action) -> SimResult<StepResult> {
        let StepOutcome { reward, terminated } = tick(self, action)?;
        Ok(StepResult {
            observation: self.observe(),
            reward,
            terminated,
        })
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, EpisodePhase::Terminated(_))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            corridor: self.corridor,
            agent: self.agent,
            coins: self.coins.iter().cloned().collect(),
            obstacles: self.obstacles.iter().cloned().collect(),
            score: self.score,
            distance: self.distance,
            phase: self.phase,
        }
    }

    pub fn queue(&self, kind: QueueKind) -> &VecDeque<Entity> {
        match kind {
            QueueKind::Coins => &self.coins,
            QueueKind::Obstacles => &self.obstacles,
        }
    }

    pub(crate) fn queue_mut(&mut self, kind: QueueKind) -> &mut VecDeque<Entity> {
        match kind {
            QueueKind::Coins => &mut self.coins,
            QueueKind::Obstacles => &mut self.obstacles,
        }
    }

    pub(crate) fn queue_floor(&self, kind: QueueKind) -> usize {
        match kind {
            QueueKind::Coins => self.config.coin_queue_floor as usize,
            QueueKind::Obstacles => self.config.obstacle_queue_floor as usize,
        }
    }

    pub(crate) fn queue_cap(&self) -> usize {
        self.config.queue_cap as usize
    }

    pub(crate) fn distance_limit(&self) -> u32 {
        self.config.distance_limit
    }

    /// Generate an entity of the queue's kind from the owned RNG
    pub(crate) fn spawn(&mut self, kind: QueueKind) -> Entity {
        match kind {
            QueueKind::Coins => gen_coin(&mut self.rng, &self.corridor),
            QueueKind::Obstacles => gen_obstacle(&mut self.rng, &self.corridor),
        }
    }

    /// Append a freshly generated entity to the back of a queue
    pub(crate) fn push_fresh(&mut self, kind: QueueKind) {
        let entity = self.spawn(kind);
        self.queue_mut(kind).push_back(entity);
    }

    /// Drop the front entity and append a replacement, keeping the length
    pub(crate) fn replace_front(&mut self, kind: QueueKind) {
        self.queue_mut(kind).pop_front();
        self.push_fresh(kind);
    }
}
