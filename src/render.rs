//! Presentation of simulation snapshots
//!
//! Renderers never feed back into the simulation. Two outputs are provided:
//! a text frame for terminals and logs, and a pixel-space draw list for
//! graphical front ends (`pixel = coordinate * CELL_SIZE`).

use std::fmt::Write;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CELL_SIZE;
use crate::sim::{Cell, Snapshot};

const EMPTY: char = '.';
const COIN: char = 'o';
const OBSTACLE: char = '#';
const AGENT: char = 'B';

/// Top-left pixel of a cell
#[inline]
pub fn pixel_position(cell: Cell) -> Vec2 {
    Vec2::new(cell.col as f32 * CELL_SIZE, cell.row as f32 * CELL_SIZE)
}

/// Top-left pixel of a 3x3-cell sprite centered on `center`
#[inline]
pub fn sprite_origin(center: Cell) -> Vec2 {
    pixel_position(center.offset(-1, -1))
}

/// Render a snapshot as rows of characters under a score line
pub fn ascii_frame(snapshot: &Snapshot) -> String {
    let corridor = snapshot.corridor;
    let width = corridor.width() as usize;
    let mut grid = vec![vec![EMPTY; width]; corridor.height() as usize];

    let mut plot = |cell: Cell, glyph: char| {
        if corridor.contains(cell) {
            grid[cell.row as usize][cell.col as usize] = glyph;
        }
    };
    for coin in &snapshot.coins {
        coin.cells().iter().for_each(|&c| plot(c, COIN));
    }
    for obstacle in &snapshot.obstacles {
        obstacle.cells().iter().for_each(|&c| plot(c, OBSTACLE));
    }
    plot(snapshot.agent, AGENT);

    let mut frame = String::with_capacity((width + 1) * (grid.len() + 1));
    let _ = writeln!(
        frame,
        "Score {}  Distance {}",
        snapshot.score, snapshot.distance
    );
    for row in grid {
        frame.extend(row);
        frame.push('\n');
    }
    frame
}

/// What a graphical renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Agent,
    Coin,
    ObstacleBlock,
}

/// One draw command in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub origin: Vec2,
    /// Edge length in pixels
    pub size: f32,
}

/// Draw list for a snapshot: obstacle blocks, coin sprites, then the agent on top
pub fn sprites(snapshot: &Snapshot) -> Vec<Sprite> {
    let mut out = Vec::new();
    for obstacle in &snapshot.obstacles {
        out.extend(obstacle.cells().iter().map(|&cell| Sprite {
            kind: SpriteKind::ObstacleBlock,
            origin: pixel_position(cell),
            size: CELL_SIZE,
        }));
    }
    for coin in &snapshot.coins {
        // Coins are drawn as one sprite over the whole block
        let center = coin.cells().get(4).or_else(|| coin.cells().first());
        if let Some(&center) = center {
            out.push(Sprite {
                kind: SpriteKind::Coin,
                origin: sprite_origin(center),
                size: CELL_SIZE * 3.0,
            });
        }
    }
    out.push(Sprite {
        kind: SpriteKind::Agent,
        origin: sprite_origin(snapshot.agent),
        size: CELL_SIZE * 3.0,
    });
    out
}
