//! Built-in action policies for headless play
//!
//! These stand in for a human at the keyboard or a trained agent.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Action, Cell, Observation};

/// Picks an action from an observation
pub trait Policy {
    fn act(&mut self, obs: &Observation) -> Action;
}

/// Jetpack on or off with equal odds
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Pcg32,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &Observation) -> Action {
        if self.rng.random_bool(0.5) {
            Action::Up
        } else {
            Action::Down
        }
    }
}

/// Columns ahead of the agent that the dodge policy inspects
const LOOKAHEAD: i32 = 4;

/// Steers away from nearby obstacles and toward the nearest coin
#[derive(Debug, Clone, Copy, Default)]
pub struct DodgePolicy;

impl DodgePolicy {
    /// Steps until an obstacle reaches `row` in the agent's column (lower is worse)
    fn clearance(obs: &Observation, row: i32) -> i32 {
        obs.obstacles
            .iter()
            .flat_map(|slot| slot.occupied_cells())
            .filter(|cell| cell.row == row)
            .map(|cell| cell.col - obs.agent.col)
            .filter(|gap| (1..=LOOKAHEAD).contains(gap))
            .min()
            .unwrap_or(LOOKAHEAD + 1)
    }

    fn coin_row(obs: &Observation) -> i32 {
        // Middle of the 3x3 block
        obs.coins[0].cells[4].row
    }
}

impl Policy for DodgePolicy {
    fn act(&mut self, obs: &Observation) -> Action {
        let Cell { row, .. } = obs.agent;
        let up = Self::clearance(obs, row - 1);
        let down = Self::clearance(obs, row + 1);
        if up != down {
            return if up > down { Action::Up } else { Action::Down };
        }
        if Self::coin_row(obs) < row {
            Action::Up
        } else {
            Action::Down
        }
    }
}
