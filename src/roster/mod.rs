//! Participants and turn order.
//!
//! The roster is append-only: participants join before the game starts and
//! keep their seat for the whole game. Only display names may change.

pub mod rotation;

pub use rotation::Roster;
