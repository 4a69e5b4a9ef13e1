//! Collision detection and reward
//!
//! Collisions are exact cell matches against the agent's post-move position.
//! Only the nearest coin can be picked up, but any of the nearest obstacles
//! is deadly, including ones still scrolling in from the right.

use std::collections::VecDeque;

use super::entity::Entity;
use super::grid::Cell;
use crate::consts::{COIN_REWARD, OBSERVED_ENTITIES, OBSTACLE_PENALTY};

/// What the agent touched this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub coin: bool,
    pub obstacle: bool,
}

impl Contact {
    /// Exactly one reward per step; an obstacle overrides a coin
    pub fn reward(&self) -> i32 {
        if self.obstacle {
            OBSTACLE_PENALTY
        } else if self.coin {
            COIN_REWARD
        } else {
            0
        }
    }
}

/// Check the agent against the front coin and the first few obstacles
pub fn detect(agent: Cell, coins: &VecDeque<Entity>, obstacles: &VecDeque<Entity>) -> Contact {
    Contact {
        coin: coins.front().is_some_and(|coin| coin.occupies(agent)),
        obstacle: obstacles
            .iter()
            .take(OBSERVED_ENTITIES)
            .any(|obstacle| obstacle.occupies(agent)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{EntityKind, ObstacleShape};

    fn coin_at(anchor: Cell) -> Entity {
        let offsets: Vec<(i32, i32)> = (0..3).flat_map(|i| (0..3).map(move |j| (i, j))).collect();
        Entity::from_offsets(EntityKind::Coin, anchor, &offsets)
    }

    fn bar_at(anchor: Cell) -> Entity {
        let shape = ObstacleShape::VerticalBar;
        Entity::from_offsets(EntityKind::Obstacle(shape), anchor, shape.offsets())
    }

    #[test]
    fn test_front_coin_only() {
        let agent = Cell::new(10, 5);
        let coins = VecDeque::from([coin_at(Cell::new(30, 5)), coin_at(Cell::new(9, 4))]);
        let contact = detect(agent, &coins, &VecDeque::new());
        assert!(!contact.coin);

        let coins = VecDeque::from([coin_at(Cell::new(9, 4))]);
        let contact = detect(agent, &coins, &VecDeque::new());
        assert!(contact.coin);
        assert_eq!(contact.reward(), 1);
    }

    #[test]
    fn test_third_obstacle_is_deadly_fourth_is_not() {
        let agent = Cell::new(10, 5);
        let far = bar_at(Cell::new(40, 40));
        let mut obstacles = VecDeque::from([far.clone(), far.clone(), bar_at(Cell::new(11, 5))]);
        assert!(detect(agent, &VecDeque::new(), &obstacles).obstacle);

        obstacles.insert(0, far);
        assert!(!detect(agent, &VecDeque::new(), &obstacles).obstacle);
    }

    #[test]
    fn test_obstacle_overrides_coin() {
        let contact = Contact {
            coin: true,
            obstacle: true,
        };
        assert_eq!(contact.reward(), -5);
        assert_eq!(Contact::default().reward(), 0);
    }
}
