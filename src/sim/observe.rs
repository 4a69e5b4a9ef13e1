//! Observations: fixed-arity snapshots of the nearest entities

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::entity::{CoinSlot, Entity, ObstacleSlot};
use super::grid::Cell;
use super::spawn::{gen_coin, gen_obstacle};
use super::state::GameState;
use crate::consts::OBSERVED_ENTITIES;

/// What an agent sees after `reset` or `step`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub agent: Cell,
    pub coins: [CoinSlot; OBSERVED_ENTITIES],
    pub obstacles: [ObstacleSlot; OBSERVED_ENTITIES],
}

impl Observation {
    /// Flatten to `[row, col, ...]`: agent, then coin cells, then obstacle cells
    pub fn to_vec(&self) -> Vec<i32> {
        let coin_cells = self.coins.iter().flat_map(|slot| slot.cells.iter());
        let obstacle_cells = self.obstacles.iter().flat_map(|slot| slot.cells.iter());
        std::iter::once(&self.agent)
            .chain(coin_cells)
            .chain(obstacle_cells)
            .flat_map(|cell| [cell.row, cell.col])
            .collect()
    }
}

impl GameState {
    /// Build the observation for the current state.
    ///
    /// Queues shorter than the observation arity are padded with entities drawn
    /// from a copy of the RNG, so observing never changes the simulation.
    pub fn observe(&self) -> Observation {
        let mut rng = self.rng.clone();
        let coins = first_slots(&self.coins, || gen_coin(&mut rng, &self.corridor));
        let obstacles = first_slots(&self.obstacles, || gen_obstacle(&mut rng, &self.corridor));
        Observation {
            agent: self.agent,
            coins,
            obstacles,
        }
    }
}

/// Slots for the first entities of a queue; slots past its end are filled by `pad`, in order
fn first_slots<S>(
    queue: &VecDeque<Entity>,
    mut pad: impl FnMut() -> Entity,
) -> [S; OBSERVED_ENTITIES]
where
    S: for<'a> From<&'a Entity>,
{
    // `from_fn` visits indices in ascending order, so padding is drawn in slot order
    std::array::from_fn(|i| match queue.get(i) {
        Some(entity) => S::from(entity),
        None => S::from(&pad()),
    })
}
