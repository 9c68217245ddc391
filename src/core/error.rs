//! Error taxonomy for every engine operation.
//!
//! No variant is fatal: each rejection leaves the engine exactly as it was
//! before the call, so the caller can reconfigure or re-prompt.

use thiserror::Error;

/// Errors returned by board, roster and engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board dimensions are zero or outside the configured bounds.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The game needs at least one participant.
    #[error("roster has no participants")]
    EmptyRoster,

    /// Coordinates are off the board or the cell is not empty.
    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: usize, y: usize },

    /// A move was submitted while no human is on turn.
    #[error("not your turn")]
    NotYourTurn,

    /// The game has already been started.
    #[error("game already started")]
    AlreadyStarted,
}
