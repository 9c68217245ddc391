//! Decision logic for automated participants.
//!
//! Strategies only read the board and draw from the RNG the engine lends
//! them; they never mutate game state. The engine applies the returned
//! coordinate through the same claim path human moves use.

pub mod policy;

pub use policy::{FirstEmpty, RandomEmpty, Strategy, StrategyKind};
