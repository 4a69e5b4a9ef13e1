//! Coins and obstacles: rigid cell clusters that scroll left together

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Corridor};
use crate::consts::{COIN_CELLS, OBSTACLE_CELLS};

/// Obstacle shape classes, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleShape {
    /// Three cells in a row, starting at the right edge
    HorizontalBar,
    /// Three cells in a column centered on the anchor row
    VerticalBar,
    /// Seven-cell cluster rising up and to the right
    Chevron,
    /// Seven-cell cluster mirrored about the anchor row
    MirroredChevron,
}

impl ObstacleShape {
    pub const ALL: [ObstacleShape; 4] = [
        ObstacleShape::HorizontalBar,
        ObstacleShape::VerticalBar,
        ObstacleShape::Chevron,
        ObstacleShape::MirroredChevron,
    ];

    /// Cell offsets `(d_row, d_col)` relative to the anchor. The first entry is the anchor.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            ObstacleShape::HorizontalBar => &[(0, 0), (0, 1), (0, 2)],
            ObstacleShape::VerticalBar => &[(0, 0), (-1, 0), (1, 0)],
            ObstacleShape::Chevron => &[
                (0, 0),
                (-1, 1),
                (-2, 2),
                (-1, 2),
                (0, 1),
                (-1, 0),
                (-2, 1),
            ],
            ObstacleShape::MirroredChevron => &[
                (0, 0),
                (1, 1),
                (2, 2),
                (-1, 2),
                (0, 1),
                (-1, 0),
                (-2, 1),
            ],
        }
    }

    /// Anchor column: bars sit on the last column, chevrons one further in
    pub fn anchor_col(self, corridor: &Corridor) -> i32 {
        match self {
            ObstacleShape::HorizontalBar | ObstacleShape::VerticalBar => corridor.last_col(),
            ObstacleShape::Chevron | ObstacleShape::MirroredChevron => corridor.last_col() - 1,
        }
    }

    /// Anchor rows for which every cell of the shape lands inside the corridor's rows
    pub fn anchor_rows(self, corridor: &Corridor) -> RangeInclusive<i32> {
        let (up, down) = self
            .offsets()
            .iter()
            .fold((0, 0), |(up, down), &(d_row, _)| (up.min(d_row), down.max(d_row)));
        -up..=corridor.last_row() - down
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Coin,
    Obstacle(ObstacleShape),
}

/// A coin or obstacle. Only occupied cells are stored, so padding can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    cells: Vec<Cell>,
}

impl Entity {
    pub fn new(kind: EntityKind, cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { kind, cells }
    }

    /// Build an entity from an anchor and an offset table
    pub fn from_offsets(kind: EntityKind, anchor: Cell, offsets: &[(i32, i32)]) -> Self {
        let cells = offsets
            .iter()
            .map(|&(d_row, d_col)| anchor.offset(d_row, d_col))
            .collect();
        Self::new(kind, cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_coin(&self) -> bool {
        self.kind == EntityKind::Coin
    }

    /// Shift every cell one column left
    pub fn scroll(&mut self) {
        for cell in &mut self.cells {
            cell.col -= 1;
        }
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Rightmost column of any cell
    pub fn trailing_col(&self) -> i32 {
        self.cells.iter().map(|c| c.col).max().unwrap_or(i32::MIN)
    }

    /// True once every cell has scrolled past column 0
    pub fn has_scrolled_out(&self) -> bool {
        self.trailing_col() < 0
    }
}

/// Copy cells into a fixed array, repeating the last real cell as padding
fn padded<const N: usize>(cells: &[Cell]) -> [Cell; N] {
    let last = cells.last().copied().unwrap_or_default();
    std::array::from_fn(|i| cells.get(i).copied().unwrap_or(last))
}

/// Fixed-shape coin observation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSlot {
    pub cells: [Cell; COIN_CELLS],
}

impl From<&Entity> for CoinSlot {
    fn from(entity: &Entity) -> Self {
        Self {
            cells: padded(entity.cells()),
        }
    }
}

/// Fixed-shape obstacle observation slot; cells past `occupied` repeat the last real cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSlot {
    pub cells: [Cell; OBSTACLE_CELLS],
    pub occupied: usize,
}

impl ObstacleSlot {
    /// The real (collidable) cells
    pub fn occupied_cells(&self) -> &[Cell] {
        &self.cells[..self.occupied]
    }
}

impl From<&Entity> for ObstacleSlot {
    fn from(entity: &Entity) -> Self {
        Self {
            cells: padded(entity.cells()),
            occupied: entity.occupied_count().min(OBSTACLE_CELLS),
        }
    }
}
