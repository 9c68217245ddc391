//! Core engine types: participants, RNG, configuration, errors.
//!
//! These are the building blocks the board, roster and engine share.
//! Front ends describe a game with `GameConfig` rather than poking at
//! engine internals.

pub mod config;
pub mod error;
pub mod participant;
pub mod rng;

pub use config::{
    GameConfig, ParticipantSpec, DEFAULT_HEIGHT, DEFAULT_STRATEGY, DEFAULT_WIDTH, MAX_HEIGHT,
    MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
pub use error::GameError;
pub use participant::{Participant, ParticipantId, ParticipantKind};
pub use rng::{GameRng, GameRngState};
