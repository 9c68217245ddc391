//! Participant identification and kinds.
//!
//! ## ParticipantId
//!
//! Position of a participant in the roster. Play order is insertion order,
//! so the id doubles as the seat number.
//!
//! ## Participant
//!
//! A display name plus a [`ParticipantKind`]: either a human waiting for
//! external input or an automated participant driven by a strategy.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::strategy::{Strategy, StrategyKind};

use super::rng::GameRng;

/// Participant identifier (0-based roster position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub usize);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Who decides a participant's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Moves arrive through `GameEngine::submit_move`.
    Human,
    /// Moves are chosen by the given strategy.
    Automated(StrategyKind),
}

/// A seat in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    kind: ParticipantKind,
}

impl Participant {
    /// Create a human participant.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::Human,
        }
    }

    /// Create an automated participant.
    pub fn automated(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::Automated(strategy),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// Whether moves are chosen by a strategy rather than submitted.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        matches!(self.kind, ParticipantKind::Automated(_))
    }

    /// Ask the participant's strategy for a cell.
    ///
    /// Always `None` for humans.
    pub fn choose_move(&self, board: &Board, rng: &mut GameRng) -> Option<Coord> {
        match self.kind {
            ParticipantKind::Human => None,
            ParticipantKind::Automated(strategy) => strategy.choose(board, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_basics() {
        let p0 = ParticipantId::new(0);
        let p1 = ParticipantId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_kinds() {
        let human = Participant::human("Player0");
        let bot = Participant::automated("Bot1", StrategyKind::FirstEmpty);

        assert!(!human.is_automated());
        assert!(bot.is_automated());
        assert_eq!(bot.kind(), ParticipantKind::Automated(StrategyKind::FirstEmpty));
    }

    #[test]
    fn test_human_never_chooses() {
        let board = Board::new(3, 3).unwrap();
        let mut rng = GameRng::new(1);

        assert_eq!(Participant::human("Player0").choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_bot_chooses_through_strategy() {
        let board = Board::new(3, 3).unwrap();
        let mut rng = GameRng::new(1);
        let bot = Participant::automated("Bot1", StrategyKind::FirstEmpty);

        assert_eq!(bot.choose_move(&board, &mut rng), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_rename() {
        let mut p = Participant::human("Player0");
        p.set_name("Alice");
        assert_eq!(p.name(), "Alice");
    }
}
