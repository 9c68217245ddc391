//! Cell states and grid coordinates.

use serde::{Deserialize, Serialize};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Available to claim.
    #[default]
    Empty,
    /// Grabbed by a neighboring claim; nobody owns it.
    Blocked,
    /// Owned by a participant. Never overwritten.
    Claimed,
}

impl CellState {
    /// Single-character glyph used by the text rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Blocked => '#',
            CellState::Claimed => '@',
        }
    }
}

/// Neighbor offsets in propagation order: left, right, up, down.
pub const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets in propagation order: up-left, up-right, down-left, down-right.
pub const DIAGONAL_OFFSETS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Board coordinate. `x` is the column, `y` the row; (0, 0) is top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by an offset, staying inside a `width` x `height` grid.
    #[must_use]
    pub fn offset(self, (dx, dy): (isize, isize), width: usize, height: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
