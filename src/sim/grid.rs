//! Corridor geometry and grid coordinates

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_CORRIDOR_DIM, MIN_CORRIDOR_HEIGHT, MIN_CORRIDOR_WIDTH};
use crate::error::{SimError, SimResult};

/// A grid coordinate. Entities may hold columns outside the corridor while
/// scrolling in or out, so both components are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell displaced by `(d_row, d_col)`
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Fixed-size corridor the agent moves within (immutable after construction).
///
/// Only corridors that fit the coin block and every obstacle shape can be built,
/// so generators never see an empty anchor range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CorridorDims")]
pub struct Corridor {
    height: i32,
    width: i32,
}

#[derive(Deserialize)]
struct CorridorDims {
    height: u32,
    width: u32,
}

impl TryFrom<CorridorDims> for Corridor {
    type Error = SimError;

    fn try_from(dims: CorridorDims) -> SimResult<Self> {
        Corridor::new(dims.height, dims.width)
    }
}

impl Corridor {
    /// 5 to 4096 rows, 3 to 4096 columns
    pub fn new(height: u32, width: u32) -> SimResult<Self> {
        let rows = MIN_CORRIDOR_HEIGHT..=MAX_CORRIDOR_DIM;
        let cols = MIN_CORRIDOR_WIDTH..=MAX_CORRIDOR_DIM;
        if !rows.contains(&height) || !cols.contains(&width) {
            return Err(SimError::InvalidCorridor { height, width });
        }
        Ok(Self {
            height: height as i32,
            width: width as i32,
        })
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// True iff the cell lies within `[0, H-1] x [0, W-1]`
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    /// Bottom-left corner, where the agent starts every episode
    pub fn start(&self) -> Cell {
        Cell::new(self.height - 1, 0)
    }

    pub fn last_row(&self) -> i32 {
        self.height - 1
    }

    pub fn last_col(&self) -> i32 {
        self.width - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_checks_both_axes() {
        let corridor = Corridor::new(64, 64).expect("valid corridor");
        assert!(corridor.contains(Cell::new(0, 0)));
        assert!(corridor.contains(Cell::new(63, 63)));
        assert!(!corridor.contains(Cell::new(-1, 0)));
        assert!(!corridor.contains(Cell::new(64, 0)));
        assert!(!corridor.contains(Cell::new(10, -1)));
        assert!(!corridor.contains(Cell::new(10, 64)));
    }

    #[test]
    fn test_start_is_bottom_left() {
        let corridor = Corridor::new(64, 32).expect("valid corridor");
        assert_eq!(corridor.start(), Cell::new(63, 0));
    }

    #[test]
    fn test_undersized_corridor_rejected() {
        assert!(matches!(
            Corridor::new(2, 64),
            Err(SimError::InvalidCorridor { height: 2, width: 64 })
        ));
        assert!(Corridor::new(4, 64).is_err());
        assert!(Corridor::new(64, 2).is_err());
        assert!(Corridor::new(0, 0).is_err());
        assert!(Corridor::new(5, 3).is_ok());
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let corridor: Corridor =
            serde_json::from_str(r#"{ "height": 8, "width": 16 }"#).expect("valid corridor");
        assert_eq!((corridor.height(), corridor.width()), (8, 16));
        assert!(serde_json::from_str::<Corridor>(r#"{ "height": 2, "width": 16 }"#).is_err());
    }
}
