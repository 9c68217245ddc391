//! Game configuration types.
//!
//! A front end describes the game it wants with a `GameConfig`:
//! - Board dimensions and the diagonal capture toggle
//! - The ordered participant composition (`ParticipantSpec`)
//! - An optional RNG seed for reproducible automated play
//!
//! `validate` is the configuration layer's bounds check. The engine itself
//! only rejects dimensions it cannot build a board from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::strategy::StrategyKind;

/// Narrowest board a front end may request.
pub const MIN_WIDTH: usize = 3;
/// Widest board a front end may request.
pub const MAX_WIDTH: usize = 13;
/// Shortest board a front end may request.
pub const MIN_HEIGHT: usize = 3;
/// Tallest board a front end may request.
pub const MAX_HEIGHT: usize = 10;

pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 6;

/// Strategy given to bots that don't name one.
pub const DEFAULT_STRATEGY: StrategyKind = StrategyKind::RandomEmpty;

/// One entry of the participant composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantSpec {
    /// Human with a caller-supplied name.
    Human { name: String },
    /// Automated participant; its name is derived when it joins the roster.
    Automated { strategy: StrategyKind },
}

impl ParticipantSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self::Human { name: name.into() }
    }

    pub fn bot(strategy: StrategyKind) -> Self {
        Self::Automated { strategy }
    }
}

impl FromStr for ParticipantSpec {
    type Err = String;

    /// Parses `human:<name>`, `bot`, `bot:first` or `bot:random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s, None),
        };

        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("human", Some(name)) if !name.is_empty() => Ok(Self::human(name)),
            ("human", _) => Err("human participants need a name, e.g. human:Alice".to_string()),
            ("bot", None) => Ok(Self::bot(DEFAULT_STRATEGY)),
            ("bot", Some(strategy)) => strategy.parse().map(Self::bot),
            _ => Err(format!(
                "unknown participant '{s}', expected human:<name> or bot[:first|random]"
            )),
        }
    }
}

/// Full configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells.
    pub width: usize,

    /// Board height in cells.
    pub height: usize,

    /// Extend propagation to the four diagonal neighbors.
    pub diagonal_capture: bool,

    /// RNG seed for automated strategies. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Participants in play order.
    pub participants: Vec<ParticipantSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            diagonal_capture: false,
            seed: None,
            participants: Vec::new(),
        }
    }
}

impl GameConfig {
    /// One bot against one human, bot moving first.
    #[must_use]
    pub fn versus_computer() -> Self {
        Self::default()
            .with_bot(DEFAULT_STRATEGY)
            .with_human("Player0")
    }

    /// Two humans sharing the board.
    #[must_use]
    pub fn two_players() -> Self {
        Self::default().with_human("Player0").with_human("Player1")
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_diagonal_capture(mut self, enabled: bool) -> Self {
        self.diagonal_capture = enabled;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append a human participant.
    #[must_use]
    pub fn with_human(mut self, name: impl Into<String>) -> Self {
        self.participants.push(ParticipantSpec::human(name));
        self
    }

    /// Append an automated participant.
    #[must_use]
    pub fn with_bot(mut self, strategy: StrategyKind) -> Self {
        self.participants.push(ParticipantSpec::bot(strategy));
        self
    }

    /// Check the dimensions against the front-end bounds.
    pub fn validate(&self) -> Result<(), GameError> {
        if (MIN_WIDTH..=MAX_WIDTH).contains(&self.width)
            && (MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height)
        {
            Ok(())
        } else {
            Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}
