//! Cell selection policies for automated participants.
//!
//! Policies are trait-based so new ones can be plugged in:
//! - `FirstEmpty`: Deterministic row-major scan
//! - `RandomEmpty`: Uniform pick among empty cells

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::core::GameRng;

// =============================================================================
// Strategy Trait
// =============================================================================

/// Policy for choosing which empty cell an automated participant claims.
pub trait Strategy: Send + Sync {
    /// Choose an `Empty` cell on the board.
    ///
    /// Returns `None` if no empty cell exists.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Coord>;
}

/// First empty cell in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEmpty;

impl Strategy for FirstEmpty {
    fn choose(&self, board: &Board, _rng: &mut GameRng) -> Option<Coord> {
        board.first_empty()
    }
}

/// Uniform random choice among all empty cells.
///
/// Makes one RNG pick per decision, so a seeded game replays identically.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomEmpty;

impl Strategy for RandomEmpty {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Coord> {
        rng.choose(&board.empty_cells()).copied()
    }
}

// =============================================================================
// Strategy Tag
// =============================================================================

/// Serializable tag naming a built-in strategy.
///
/// Participants store this tag; `choose` dispatches to the matching policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    FirstEmpty,
    RandomEmpty,
}

impl StrategyKind {
    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::FirstEmpty => "first",
            StrategyKind::RandomEmpty => "random",
        }
    }
}

impl Strategy for StrategyKind {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Coord> {
        match self {
            StrategyKind::FirstEmpty => FirstEmpty.choose(board, rng),
            StrategyKind::RandomEmpty => RandomEmpty.choose(board, rng),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "first-empty" => Ok(StrategyKind::FirstEmpty),
            "random" | "random-empty" => Ok(StrategyKind::RandomEmpty),
            _ => Err(format!("unknown strategy '{s}', expected first or random")),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
