//! # blocking-game
//!
//! Engine for a turn-based territory-claiming grid game.
//!
//! Participants take turns claiming an empty cell. A claim grabs the
//! orthogonal neighbors (and, with diagonal capture, the diagonal ones),
//! blocking them for everyone. When no empty cell remains the game ends and
//! the participant on turn at that moment is declared winner.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws or reads input. Front
//!    ends submit coordinates and read state back.
//!
//! 2. **Synchronous**: A command returns only once every chained automated
//!    turn has been played, so the caller always sees a human on turn or a
//!    finished game.
//!
//! 3. **Reproducible**: Automated strategies draw from a seedable RNG owned
//!    by the engine, never from a global generator.
//!
//! ## Modules
//!
//! - `core`: Participants, RNG, configuration, errors
//! - `board`: Grid, cell states, claim/propagation rule
//! - `roster`: Participant order and turn rotation
//! - `strategy`: Automated participant policies
//! - `rules`: `GameEngine` lifecycle and snapshots

pub mod board;
pub mod core;
pub mod roster;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, Participant, ParticipantId, ParticipantKind,
    ParticipantSpec,
};

pub use crate::board::{Board, CellState, ClaimReport, Coord};

pub use crate::roster::Roster;

pub use crate::strategy::{FirstEmpty, RandomEmpty, Strategy, StrategyKind};

pub use crate::rules::{GameEngine, GameSnapshot, GameStatus, MoveOutcome};
