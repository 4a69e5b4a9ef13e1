//! Reset/step/render/close environment contract
//!
//! `JetpackEnv` is what a human play loop or a learning agent drives:
//! collect an action, step, render, repeat.

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::render;
use crate::sim::{Action, GameState, Observation, Snapshot};

/// One transition returned by [`Env::step`]
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: i32,
    pub terminated: bool,
    /// Always false: no time-limit wrapper is applied here
    pub truncated: bool,
}

/// Episodic environment interface
pub trait Env {
    type Observation;
    type Action;

    /// Start a new episode, optionally reseeding
    fn reset(&mut self, seed: Option<u64>) -> Self::Observation;

    /// Advance one step
    fn step(&mut self, action: Self::Action) -> SimResult<Step<Self::Observation>>;

    /// Text frame of the current state, or `None` once closed
    fn render(&self) -> Option<String>;

    /// Release presentation resources
    fn close(&mut self);
}

/// The jetpack runner as an environment
#[derive(Debug, Clone)]
pub struct JetpackEnv {
    state: GameState,
    closed: bool,
}

impl JetpackEnv {
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        Ok(Self {
            state: GameState::new(config)?,
            closed: false,
        })
    }

    /// Step with a raw integer action; anything but 0 or 1 is rejected and the state is left untouched
    pub fn step_raw(&mut self, action: i64) -> SimResult<Step<Observation>> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    /// Current observation without stepping
    pub fn observation(&self) -> Observation {
        self.state.observe()
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Env for JetpackEnv {
    type Observation = Observation;
    type Action = Action;

    fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.state.reset(seed)
    }

    fn step(&mut self, action: Action) -> SimResult<Step<Observation>> {
        let result = self.state.step(action)?;
        Ok(Step {
            observation: result.observation,
            reward: result.reward,
            terminated: result.terminated,
            truncated: false,
        })
    }

    fn render(&self) -> Option<String> {
        if self.closed {
            return None;
        }
        Some(render::ascii_frame(&self.state.snapshot()))
    }

    fn close(&mut self) {
        if !self.closed {
            log::info!("Environment closed");
        }
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::sim::{Cell, Entity, EntityKind, ObstacleShape};

    fn env(seed: u64) -> JetpackEnv {
        JetpackEnv::new(&SimConfig::seeded(seed)).expect("valid config")
    }

    #[test]
    fn test_invalid_action_rejected_without_side_effects() {
        let mut env = env(3);
        let before = env.observation();
        assert!(matches!(env.step_raw(2), Err(SimError::InvalidAction(2))));
        assert!(matches!(env.step_raw(-7), Err(SimError::InvalidAction(-7))));
        assert_eq!(env.state().distance, 0);
        assert_eq!(env.observation(), before);

        let step = env.step_raw(1).expect("valid action");
        assert_eq!(step.observation.agent, Cell::new(62, 0));
        assert!(!step.truncated);
    }

    #[test]
    fn test_manual_obstacle_collision() {
        let mut env = env(4);
        let state = env.state_mut();
        state.obstacles[0] = Entity::new(
            EntityKind::Obstacle(ObstacleShape::VerticalBar),
            vec![Cell::new(62, 1), Cell::new(61, 1), Cell::new(63, 1)],
        );
        let step = env.step(Action::Up).expect("running");
        assert_eq!(step.reward, -5);
        assert!(step.terminated);
        assert!(!step.truncated);
        assert!(matches!(env.step(Action::Up), Err(SimError::EpisodeTerminated)));

        env.reset(None);
        assert!(env.step(Action::Up).is_ok());
    }

    #[test]
    fn test_manual_coin_pickup() {
        let mut env = env(5);
        let state = env.state_mut();
        state.obstacles[0] = Entity::new(
            EntityKind::Obstacle(ObstacleShape::HorizontalBar),
            vec![Cell::new(-50, 300)],
        );
        state.coins[0] = Entity::new(EntityKind::Coin, vec![Cell::new(62, 1)]);
        let step = env.step(Action::Up).expect("running");
        assert_eq!(step.reward, 1);
        assert!(!step.terminated);
        assert_eq!(env.state().score, 1);
    }

    #[test]
    fn test_render_and_close() {
        let mut env = env(6);
        let frame = env.render().expect("open env renders");
        assert!(frame.starts_with("Score 0"));
        env.close();
        assert!(env.is_closed());
        assert!(env.render().is_none());
        // Simulation keeps working after the presentation is closed
        assert!(env.step(Action::Down).is_ok());
    }
}
