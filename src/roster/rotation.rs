//! Ordered participants and round-robin turn rotation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, Participant, ParticipantId};
use crate::strategy::StrategyKind;

/// Ordered participants plus a monotonically increasing turn counter.
///
/// The participant on turn is `participants[turn % len]`, so rotation is
/// strictly round-robin in insertion order regardless of participant kind.
///
/// ```
/// use blocking_game::roster::Roster;
/// use blocking_game::strategy::StrategyKind;
///
/// let mut roster = Roster::new();
/// roster.add_human("Player0");
/// roster.add_automated(StrategyKind::FirstEmpty);
///
/// assert_eq!(roster.current().unwrap().name(), "Player0");
/// roster.advance();
/// assert_eq!(roster.current().unwrap().name(), "Bot2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
    turn: u64,
}

impl Roster {
    /// Create an empty roster at turn 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a human participant.
    pub fn add_human(&mut self, name: impl Into<String>) -> ParticipantId {
        self.push(Participant::human(name))
    }

    /// Append an automated participant named `Bot<N>`.
    ///
    /// `N` counts every participant present once this one joins, so names
    /// depend on insertion order including interleaved humans.
    pub fn add_automated(&mut self, strategy: StrategyKind) -> ParticipantId {
        let name = format!("Bot{}", self.participants.len() + 1);
        self.push(Participant::automated(name, strategy))
    }

    fn push(&mut self, participant: Participant) -> ParticipantId {
        let id = ParticipantId::new(self.participants.len());
        debug!(
            %id,
            name = participant.name(),
            automated = participant.is_automated(),
            "participant joined"
        );
        self.participants.push(participant);
        id
    }

    /// Id of the participant on turn.
    pub fn current_id(&self) -> Result<ParticipantId, GameError> {
        if self.participants.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let len = self.participants.len() as u64;
        Ok(ParticipantId::new((self.turn % len) as usize))
    }

    /// The participant on turn.
    pub fn current(&self) -> Result<&Participant, GameError> {
        let id = self.current_id()?;
        Ok(&self.participants[id.index()])
    }

    /// Move to the next turn.
    pub fn advance(&mut self) {
        self.turn += 1;
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.index())
    }

    /// Change a participant's display name.
    ///
    /// Returns `false` when `id` is not in the roster. Names already
    /// recorded on claimed cells are not rewritten.
    pub fn rename(&mut self, id: ParticipantId, name: impl Into<String>) -> bool {
        match self.participants.get_mut(id.index()) {
            Some(participant) => {
                participant.set_name(name);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterate over `(ParticipantId, &Participant)` in play order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Participant)> {
        self.participants
            .iter()
            .enumerate()
            .map(|(i, p)| (ParticipantId::new(i), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.current().unwrap_err(), GameError::EmptyRoster);
        assert_eq!(roster.current_id(), Err(GameError::EmptyRoster));
    }

    #[test]
    fn test_bot_names_follow_insertion_order() {
        let mut roster = Roster::new();
        roster.add_automated(StrategyKind::RandomEmpty);
        roster.add_human("Player0");
        roster.add_automated(StrategyKind::FirstEmpty);
        roster.add_automated(StrategyKind::FirstEmpty);

        let names: Vec<_> = roster.iter().map(|(_, p)| p.name().to_string()).collect();
        assert_eq!(names, vec!["Bot1", "Player0", "Bot3", "Bot4"]);
    }

    #[test]
    fn test_round_robin() {
        let mut roster = Roster::new();
        let a = roster.add_human("A");
        let b = roster.add_automated(StrategyKind::FirstEmpty);
        let c = roster.add_human("C");

        let order: Vec<_> = (0..7)
            .map(|_| {
                let id = roster.current_id().unwrap();
                roster.advance();
                id
            })
            .collect();

        assert_eq!(order, vec![a, b, c, a, b, c, a]);
        assert_eq!(roster.turn(), 7);
    }

    #[test]
    fn test_single_participant_always_current() {
        let mut roster = Roster::new();
        let only = roster.add_automated(StrategyKind::FirstEmpty);

        for _ in 0..5 {
            assert_eq!(roster.current_id(), Ok(only));
            roster.advance();
        }
    }

    #[test]
    fn test_rename() {
        let mut roster = Roster::new();
        let id = roster.add_human("Player0");

        assert!(roster.rename(id, "Alice"));
        assert_eq!(roster.get(id).unwrap().name(), "Alice");
        assert!(!roster.rename(ParticipantId::new(9), "Nobody"));
        assert_eq!(roster.len(), 1);
    }
}
