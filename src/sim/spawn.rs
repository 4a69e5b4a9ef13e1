//! Procedural generation of coins and obstacles
//!
//! Generators only draw from the RNG they are handed; they never touch global state.

use rand::Rng;

use super::entity::{Entity, EntityKind, ObstacleShape};
use super::grid::{Cell, Corridor};

/// Side length of the square coin block
pub const COIN_BLOCK: i32 = 3;

/// A 3x3 coin block at a random row, three columns in from the right edge
pub fn gen_coin<R: Rng + ?Sized>(rng: &mut R, corridor: &Corridor) -> Entity {
    let anchor = Cell::new(
        rng.random_range(0..=corridor.height() - COIN_BLOCK),
        corridor.width() - COIN_BLOCK,
    );
    let mut cells = Vec::with_capacity((COIN_BLOCK * COIN_BLOCK) as usize);
    for i in 0..COIN_BLOCK {
        for j in 0..COIN_BLOCK {
            cells.push(anchor.offset(i, j));
        }
    }
    log::trace!("Spawned coin at {:?}", anchor);
    Entity::new(EntityKind::Coin, cells)
}

/// An obstacle of a uniformly chosen shape at a random in-bounds row
pub fn gen_obstacle<R: Rng + ?Sized>(rng: &mut R, corridor: &Corridor) -> Entity {
    let shape = ObstacleShape::ALL[rng.random_range(0..ObstacleShape::ALL.len())];
    let anchor = Cell::new(
        rng.random_range(shape.anchor_rows(corridor)),
        shape.anchor_col(corridor),
    );
    log::trace!("Spawned {:?} obstacle at {:?}", shape, anchor);
    Entity::from_offsets(EntityKind::Obstacle(shape), anchor, shape.offsets())
}
