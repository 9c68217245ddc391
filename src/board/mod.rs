//! Grid model and the claim/propagation rule.
//!
//! ## Key Types
//!
//! - `Coord`: Column/row position, (0, 0) is top-left
//! - `CellState`: `Empty`, `Blocked` or `Claimed`
//! - `Board`: Fixed-size grid, claim rule, empty-cell queries
//! - `ClaimReport`: What a single claim changed

pub mod cell;
pub mod grid;

pub use cell::{CellState, Coord, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
pub use grid::{Board, ClaimReport, Neighbors};
