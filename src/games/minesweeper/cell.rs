//! Cells and board coordinates.

use serde::{Deserialize, Serialize};

use super::config::{CELL_PX, COLS, ROWS};

/// Row/column of a cell. Always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Create a position. Panics if off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < ROWS && col < COLS, "Cell ({}, {}) is off the board", row, col);
        Self { row, col }
    }

    /// Checked constructor.
    #[must_use]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Cell under a pixel, or `None` if the pixel is outside the board.
    #[must_use]
    pub fn from_pixel(x: f64, y: f64) -> Option<Self> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / CELL_PX).floor() as usize;
        let row = (y / CELL_PX).floor() as usize;
        Self::try_new(row, col)
    }

    /// Top-left pixel of the cell.
    #[must_use]
    pub fn origin_px(self) -> (f64, f64) {
        (self.col as f64 * CELL_PX, self.row as f64 * CELL_PX)
    }

    /// Every position, row-major.
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| CellPos { row, col }))
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the 8 neighbors. Meaningless on a mine.
    pub neighbor_count: u8,
}

impl Cell {
    #[must_use]
    pub fn is_safe(&self) -> bool {
        !self.is_mine
    }
}
