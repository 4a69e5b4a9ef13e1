//! Discrete simulation step
//!
//! Core loop that advances the corridor by exactly one column per call.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{EpisodePhase, GameState, QueueKind, Termination};
use crate::consts::SPAWN_ODDS;
use crate::error::{SimError, SimResult};

/// Jetpack input for a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Jetpack off: fall one row
    Down = 0,
    /// Jetpack on: rise one row
    Up = 1,
}

impl Action {
    fn row_delta(self) -> i32 {
        match self {
            Action::Down => 1,
            Action::Up => -1,
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = SimError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Down),
            1 => Ok(Action::Up),
            other => Err(SimError::InvalidAction(other)),
        }
    }
}

/// Reward and termination for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub reward: i32,
    pub terminated: bool,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, action: Action) -> SimResult<StepOutcome> {
    if state.is_terminated() {
        return Err(SimError::EpisodeTerminated);
    }

    // Out-of-bounds moves are dropped, not clamped
    let candidate = state.agent.offset(action.row_delta(), 0);
    if state.corridor.contains(candidate) {
        state.agent = candidate;
    }

    for entity in state.coins.iter_mut().chain(state.obstacles.iter_mut()) {
        entity.scroll();
    }

    for kind in [QueueKind::Coins, QueueKind::Obstacles] {
        recycle(state, kind);
    }
    for kind in [QueueKind::Coins, QueueKind::Obstacles] {
        top_up(state, kind);
    }

    state.distance += 1;

    let contact = collision::detect(state.agent, &state.coins, &state.obstacles);
    if contact.coin {
        state.score += 1;
        state.replace_front(QueueKind::Coins);
        log::debug!("Coin picked up at {:?} (score {})", state.agent, state.score);
    }

    let termination = if contact.obstacle {
        Some(Termination::ObstacleHit)
    } else if state.distance > state.distance_limit() {
        Some(Termination::DistanceLimit)
    } else {
        None
    };
    if let Some(reason) = termination {
        state.phase = EpisodePhase::Terminated(reason);
        log::info!(
            "Episode over: {:?} after {} steps, score {}",
            reason,
            state.distance,
            state.score
        );
    }

    Ok(StepOutcome {
        reward: contact.reward(),
        terminated: termination.is_some(),
    })
}

/// Evict the front entity once it has fully left the corridor
fn recycle(state: &mut GameState, kind: QueueKind) {
    if state.queue(kind).front().is_some_and(|e| e.has_scrolled_out()) {
        state.replace_front(kind);
        log::debug!("Recycled front of {:?} queue", kind);
    }
}

/// Occasionally add an entity while below the cap, then refill to the floor
fn top_up(state: &mut GameState, kind: QueueKind) {
    if state.queue(kind).len() < state.queue_cap() && state.rng.random_range(1..=SPAWN_ODDS) == 1 {
        state.push_fresh(kind);
    }
    while state.queue(kind).len() < state.queue_floor(kind) {
        state.push_fresh(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::entity::{Entity, EntityKind, ObstacleShape};
    use crate::sim::grid::Cell;

    fn state(seed: u64) -> GameState {
        GameState::new(&SimConfig::seeded(seed)).expect("valid config")
    }

    /// Park every entity far outside the corridor so nothing interferes
    fn clear_field(state: &mut GameState) {
        for entity in state.coins.iter_mut().chain(state.obstacles.iter_mut()) {
            *entity = park(entity.kind);
        }
    }

    fn park(kind: EntityKind) -> Entity {
        Entity::new(kind, vec![Cell::new(-100, 500)])
    }

    fn single_cell(kind: EntityKind, cell: Cell) -> Entity {
        Entity::new(kind, vec![cell])
    }

    #[test]
    fn test_action_from_int() {
        assert_eq!(Action::try_from(0).ok(), Some(Action::Down));
        assert_eq!(Action::try_from(1).ok(), Some(Action::Up));
        assert!(matches!(Action::try_from(2), Err(SimError::InvalidAction(2))));
        assert!(matches!(Action::try_from(-1), Err(SimError::InvalidAction(-1))));
    }

    #[test]
    fn test_always_up_clamps_at_top() {
        let mut state = state(5);
        for step in 1..=70 {
            clear_field(&mut state);
            let outcome = tick(&mut state, Action::Up).expect("running");
            assert!(!outcome.terminated);
            assert_eq!(state.agent.row, (63 - step).max(0));
            assert_eq!(state.agent.col, 0);
        }
        assert_eq!(state.agent, Cell::new(0, 0));
    }

    #[test]
    fn test_down_at_floor_is_noop() {
        let mut state = state(5);
        clear_field(&mut state);
        tick(&mut state, Action::Down).expect("running");
        assert_eq!(state.agent, Cell::new(63, 0));
    }

    #[test]
    fn test_scroll_moves_every_entity_left() {
        let mut state = state(11);
        let coin_cols: Vec<i32> = state.coins.iter().map(|e| e.cells()[0].col).collect();
        let obstacle_cols: Vec<i32> = state.obstacles.iter().map(|e| e.cells()[0].col).collect();
        tick(&mut state, Action::Up).expect("running");
        for (entity, col) in state.coins.iter().zip(coin_cols) {
            assert_eq!(entity.cells()[0].col, col - 1);
        }
        for (entity, col) in state.obstacles.iter().zip(obstacle_cols) {
            assert_eq!(entity.cells()[0].col, col - 1);
        }
    }

    #[test]
    fn test_scrolled_out_front_is_recycled() {
        let mut state = state(8);
        clear_field(&mut state);
        state.coins[0] = single_cell(EntityKind::Coin, Cell::new(5, 0));
        let before = state.coins.len();
        tick(&mut state, Action::Up).expect("running");
        assert!(state.coins.len() >= before);
        assert!(!state.coins.iter().any(|c| c.cells()[0] == Cell::new(5, -1)));
        assert!(!state.coins[0].has_scrolled_out());
    }

    #[test]
    fn test_obstacle_hit_terminates() {
        let mut state = state(21);
        clear_field(&mut state);
        // Agent moves to (62, 0); the obstacle scrolls from col 1 to col 0
        let shape = ObstacleShape::HorizontalBar;
        state.obstacles[0] = single_cell(EntityKind::Obstacle(shape), Cell::new(62, 1));
        let outcome = tick(&mut state, Action::Up).expect("running");
        assert_eq!(outcome.reward, -5);
        assert!(outcome.terminated);
        assert_eq!(state.phase, EpisodePhase::Terminated(Termination::ObstacleHit));
        // Obstacles are not consumed on contact
        assert!(state.obstacles.iter().any(|o| o.occupies(Cell::new(62, 0))));
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = state(22);
        clear_field(&mut state);
        state.coins[0] = single_cell(EntityKind::Coin, Cell::new(62, 1));
        let outcome = tick(&mut state, Action::Up).expect("running");
        assert_eq!(outcome.reward, 1);
        assert!(!outcome.terminated);
        assert_eq!(state.score, 1);
        assert!(!state.coins.iter().any(|c| c.occupies(Cell::new(62, 0))));
        assert!(state.coins.len() >= 3);
    }

    #[test]
    fn test_coin_pickup_keeps_queue_length() {
        let mut state = state(23);
        // Fill to the cap so probabilistic spawning cannot change the length
        while state.coins.len() < 10 {
            state.push_fresh(QueueKind::Coins);
        }
        clear_field(&mut state);
        state.coins[0] = single_cell(EntityKind::Coin, Cell::new(62, 1));
        tick(&mut state, Action::Up).expect("running");
        assert_eq!(state.coins.len(), 10);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_obstacle_beats_coin() {
        let mut state = state(24);
        clear_field(&mut state);
        state.coins[0] = single_cell(EntityKind::Coin, Cell::new(62, 1));
        state.obstacles[0] = single_cell(
            EntityKind::Obstacle(ObstacleShape::VerticalBar),
            Cell::new(62, 1),
        );
        let outcome = tick(&mut state, Action::Up).expect("running");
        assert_eq!(outcome.reward, -5);
        assert!(outcome.terminated);
        // The coin is still collected
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_distance_limit() {
        let config = SimConfig {
            distance_limit: 5,
            ..SimConfig::seeded(9)
        };
        let mut state = GameState::new(&config).expect("valid config");
        for step in 1..=6 {
            clear_field(&mut state);
            let outcome = tick(&mut state, Action::Down).expect("running");
            assert_eq!(state.distance, step);
            assert_eq!(outcome.terminated, step > 5);
        }
        assert_eq!(state.phase, EpisodePhase::Terminated(Termination::DistanceLimit));
        assert!(matches!(
            tick(&mut state, Action::Down),
            Err(SimError::EpisodeTerminated)
        ));
    }

    #[test]
    fn test_queues_filled_to_floor() {
        let mut state = state(30);
        assert_eq!(state.coins.len(), 1);
        clear_field(&mut state);
        tick(&mut state, Action::Down).expect("running");
        assert!(state.coins.len() >= 3);
        assert!(state.obstacles.len() >= 3);
    }
}
