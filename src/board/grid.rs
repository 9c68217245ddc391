//! The claimable grid and its propagation rule.
//!
//! Claiming an `Empty` cell turns it `Claimed` and grabs every in-bounds
//! neighbor that is not itself `Claimed`, marking it `Blocked`. Orthogonal
//! neighbors are always grabbed; diagonal ones only with diagonal capture.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::ops::Index;

use super::cell::{CellState, Coord, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
use crate::core::error::GameError;

/// Neighbor list for one cell (at most eight entries).
pub type Neighbors = SmallVec<[Coord; 8]>;

/// Result of a successful claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimReport {
    /// The claimed cell.
    pub coord: Coord,
    /// Cells that went from `Empty` to `Blocked`, in propagation order.
    pub blocked: Neighbors,
}

/// Fixed-size grid of cell states, stored row-major.
///
/// ## Usage
///
/// ```
/// use blocking_game::board::{Board, CellState, Coord};
///
/// let mut board = Board::new(3, 3).unwrap();
/// board.claim(1, 1, "Player0").unwrap();
///
/// assert_eq!(board[Coord::new(1, 0)], CellState::Blocked);
/// assert_eq!(board[Coord::new(0, 0)], CellState::Empty);
/// assert_eq!(board.owner_of(1, 1), Some("Player0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    diagonal_capture: bool,
    cells: Vec<CellState>,
    /// Claimed coordinate -> owner display name at claim time.
    owners: FxHashMap<Coord, String>,
}

impl Board {
    /// Create a board with every cell `Empty` and diagonal capture off.
    ///
    /// Fails with `InvalidDimensions` when either side is zero or the cell
    /// count does not fit in memory addressing.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(GameError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            diagonal_capture: false,
            cells: vec![CellState::Empty; len],
            owners: FxHashMap::default(),
        })
    }

    /// Enable or disable diagonal capture.
    #[must_use]
    pub fn with_diagonal_capture(mut self, enabled: bool) -> Self {
        self.diagonal_capture = enabled;
        self
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn diagonal_capture(&self) -> bool {
        self.diagonal_capture
    }

    /// Whether the coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// State of a cell, or `None` when off the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        self.contains(x, y).then(|| self.cells[self.index_of(x, y)])
    }

    /// Owner recorded when the cell was claimed.
    ///
    /// `None` for cells that are not `Claimed` or off the board.
    #[must_use]
    pub fn owner_of(&self, x: usize, y: usize) -> Option<&str> {
        self.owners.get(&Coord::new(x, y)).map(String::as_str)
    }

    /// Claim a cell for `owner` and propagate to its neighbors.
    ///
    /// Fails with `IllegalMove` when the cell is off the board or not
    /// `Empty`. The check happens before any mutation, so a rejected claim
    /// leaves the board untouched.
    pub fn claim(&mut self, x: usize, y: usize, owner: &str) -> Result<ClaimReport, GameError> {
        if self.cell(x, y) != Some(CellState::Empty) {
            return Err(GameError::IllegalMove { x, y });
        }

        let coord = Coord::new(x, y);
        let idx = self.index_of(x, y);
        self.cells[idx] = CellState::Claimed;
        self.owners.insert(coord, owner.to_string());

        let mut blocked = Neighbors::new();
        for neighbor in self.neighbors(coord) {
            let idx = self.index_of(neighbor.x, neighbor.y);
            match self.cells[idx] {
                CellState::Empty => {
                    self.cells[idx] = CellState::Blocked;
                    blocked.push(neighbor);
                }
                // Claimed cells are immune; blocked ones stay blocked.
                CellState::Blocked | CellState::Claimed => {}
            }
        }

        Ok(ClaimReport { coord, blocked })
    }

    /// In-bounds neighbors of `coord` in propagation order.
    ///
    /// Left, right, up, down, then (with diagonal capture) up-left,
    /// up-right, down-left, down-right.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        let diagonals: &[(isize, isize)] = if self.diagonal_capture {
            &DIAGONAL_OFFSETS
        } else {
            &[]
        };

        ORTHOGONAL_OFFSETS
            .iter()
            .chain(diagonals)
            .filter_map(|&offset| coord.offset(offset, self.width, self.height))
            .collect()
    }

    /// Whether any cell is still `Empty`.
    ///
    /// This is the game's only termination check.
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&CellState::Empty)
    }

    /// First `Empty` cell scanning rows top-to-bottom, columns left-to-right.
    #[must_use]
    pub fn first_empty(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == CellState::Empty)
            .map(|i| self.coord_of(i))
    }

    /// All `Empty` cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|&(_, state)| state == CellState::Empty)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells in the given state.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Coord, CellState)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &state)| (self.coord_of(i), state))
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn coord_of(&self, idx: usize) -> Coord {
        Coord::new(idx % self.width, idx / self.width)
    }
}

impl Index<Coord> for Board {
    type Output = CellState;

    /// Panics when the coordinate is off the board; use [`Board::cell`] to check.
    fn index(&self, coord: Coord) -> &Self::Output {
        assert!(self.contains(coord.x, coord.y), "coordinate {coord} is off the board");
        &self.cells[self.index_of(coord.x, coord.y)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;

        for y in 0..self.height {
            write!(f, "{:>3}", y)?;
            for x in 0..self.width {
                write!(f, "{:>3}", self.cells[self.index_of(x, y)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
