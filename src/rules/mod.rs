//! Game orchestration.
//!
//! `GameEngine` is the only entry point front ends use:
//! - Commands: `configure`, `start`, `submit_move`, `reset`
//! - Queries: cell states, owners, participant on turn, status, winner
//!
//! The engine has no internal locking. Callers that share one instance
//! across an event loop must serialize their calls.

pub mod engine;
pub mod snapshot;

pub use engine::{GameEngine, GameStatus, MoveOutcome};
pub use snapshot::GameSnapshot;
