//! Point-in-time copy of everything a front end can observe.
//!
//! Snapshots compare with `==`, which is how callers (and tests) confirm
//! that a rejected command left the engine untouched.

use serde::{Deserialize, Serialize};

use super::engine::GameStatus;
use crate::board::{Board, CellState};
use crate::core::{GameRng, GameRngState, ParticipantId};
use crate::roster::Roster;

/// Serializable engine state.
///
/// Cells and owners are row-major, one entry per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub width: usize,
    pub height: usize,
    pub diagonal_capture: bool,
    pub cells: Vec<CellState>,
    pub owners: Vec<Option<String>>,
    pub roster: Roster,
    pub winner: Option<ParticipantId>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    pub(crate) fn capture(
        status: GameStatus,
        board: &Board,
        roster: &Roster,
        winner: Option<ParticipantId>,
        rng: &GameRng,
    ) -> Self {
        let (cells, owners) = board
            .iter()
            .map(|(c, state)| (state, board.owner_of(c.x, c.y).map(str::to_string)))
            .unzip();

        Self {
            status,
            width: board.width(),
            height: board.height(),
            diagonal_capture: board.diagonal_capture(),
            cells,
            owners,
            roster: roster.clone(),
            winner,
            rng: rng.state(),
        }
    }

    /// State of a cell, `None` when off the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }
}
