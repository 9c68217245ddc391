//! Game engine: board, roster and strategies driven through one game.
//!
//! Lifecycle is `NotStarted -> InProgress -> Finished`. Leaving `Finished`
//! takes a fresh engine or an explicit [`GameEngine::reset`].
//!
//! Every move, human or automated, goes through the same path: claim the
//! cell, advance the turn, check for an exhausted board. After a human move
//! the engine keeps playing automated turns until a human is on turn or the
//! game ends, so control only returns to the caller at those two points.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::snapshot::GameSnapshot;
use crate::board::{Board, CellState};
use crate::core::{GameConfig, GameError, GameRng, Participant, ParticipantId, ParticipantSpec};
use crate::roster::Roster;
use crate::strategy::StrategyKind;

/// Engine lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Configurable; roster may still change.
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Board exhausted, winner declared.
    Finished,
}

/// Result of a command that may have ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A human is on turn.
    Continue,
    /// No empty cell remains.
    GameOver { winner: ParticipantId },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, MoveOutcome::GameOver { .. })
    }
}

/// Owns all state for a single game.
///
/// ## Usage
///
/// ```
/// use blocking_game::{GameConfig, GameEngine, GameStatus, MoveOutcome};
///
/// let config = GameConfig::two_players().with_dimensions(3, 3);
/// let mut engine = GameEngine::from_config(config).unwrap();
/// engine.start().unwrap();
///
/// assert_eq!(engine.submit_move(1, 1).unwrap(), MoveOutcome::Continue);
/// assert_eq!(engine.current_participant_name(), Some("Player1"));
/// assert_eq!(engine.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    roster: Roster,
    rng: GameRng,
    status: GameStatus,
    winner: Option<ParticipantId>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with the default board and no participants.
    #[must_use]
    pub fn new() -> Self {
        let config = GameConfig::default();
        let board = Board::new(config.width, config.height)
            .unwrap_or_else(|_| unreachable!("default dimensions are non-zero"));

        Self {
            config,
            board,
            roster: Roster::new(),
            rng: GameRng::from_entropy(),
            status: GameStatus::NotStarted,
            winner: None,
        }
    }

    /// Create an engine and apply `config`.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let mut engine = Self::new();
        engine.configure(config)?;
        Ok(engine)
    }

    // === Commands ===

    /// Build the board and roster from `config`.
    ///
    /// Only valid before the game starts. Range checks belong to
    /// [`GameConfig::validate`]; the engine only rejects zero dimensions.
    pub fn configure(&mut self, config: GameConfig) -> Result<(), GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        let board = Board::new(config.width, config.height)?
            .with_diagonal_capture(config.diagonal_capture);

        let mut roster = Roster::new();
        for spec in &config.participants {
            match spec {
                ParticipantSpec::Human { name } => roster.add_human(name.clone()),
                ParticipantSpec::Automated { strategy } => roster.add_automated(*strategy),
            };
        }

        self.rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.board = board;
        self.roster = roster;
        self.winner = None;
        self.config = config;
        Ok(())
    }

    /// Append a human participant before the game starts.
    pub fn add_human(&mut self, name: impl Into<String>) -> Result<ParticipantId, GameError> {
        self.ensure_not_started()?;
        let name = name.into();
        self.config.participants.push(ParticipantSpec::human(name.clone()));
        Ok(self.roster.add_human(name))
    }

    /// Append an automated participant before the game starts.
    pub fn add_automated(&mut self, strategy: StrategyKind) -> Result<ParticipantId, GameError> {
        self.ensure_not_started()?;
        self.config.participants.push(ParticipantSpec::bot(strategy));
        Ok(self.roster.add_automated(strategy))
    }

    /// Change a participant's display name.
    ///
    /// Returns `false` for an unknown id. Cells already claimed keep the
    /// name they were claimed under.
    pub fn rename(&mut self, id: ParticipantId, name: impl Into<String>) -> bool {
        self.roster.rename(id, name)
    }

    /// Start the game.
    ///
    /// If an automated participant is on turn 0 it plays immediately, along
    /// with any automated participants following it.
    pub fn start(&mut self) -> Result<MoveOutcome, GameError> {
        self.ensure_not_started()?;
        self.roster.current_id()?;

        self.status = GameStatus::InProgress;
        info!(
            width = self.board.width(),
            height = self.board.height(),
            diagonal = self.board.diagonal_capture(),
            participants = self.roster.len(),
            "game started"
        );

        self.run_automated_turns()
    }

    /// Claim a cell for the human on turn.
    ///
    /// Rejected with `NotYourTurn` outside `InProgress` or while an
    /// automated participant is on turn, and with `IllegalMove` for
    /// off-board or non-empty cells. Rejections change nothing.
    pub fn submit_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::InProgress || self.current_participant()?.is_automated() {
            return Err(GameError::NotYourTurn);
        }

        match self.apply_claim(x, y)? {
            MoveOutcome::Continue => self.run_automated_turns(),
            outcome => Ok(outcome),
        }
    }

    /// Return to `NotStarted` with a fresh board and roster rebuilt from the
    /// current configuration.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.status = GameStatus::NotStarted;
        self.configure(self.config.clone())
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// State of a cell, `None` when off the board.
    #[must_use]
    pub fn cell_state(&self, x: usize, y: usize) -> Option<CellState> {
        self.board.cell(x, y)
    }

    /// Owner of a claimed cell.
    #[must_use]
    pub fn owner_of(&self, x: usize, y: usize) -> Option<&str> {
        self.board.owner_of(x, y)
    }

    /// The participant on turn.
    pub fn current_participant(&self) -> Result<&Participant, GameError> {
        self.roster.current()
    }

    #[must_use]
    pub fn current_participant_name(&self) -> Option<&str> {
        self.roster.current().ok().map(Participant::name)
    }

    /// Declared winner; `None` until the game is `Finished`.
    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        self.winner
    }

    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|id| self.roster.get(id))
            .map(Participant::name)
    }

    /// Capture the full observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.status, &self.board, &self.roster, self.winner, &self.rng)
    }

    // === Internals ===

    fn ensure_not_started(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::NotStarted => Ok(()),
            GameStatus::InProgress | GameStatus::Finished => Err(GameError::AlreadyStarted),
        }
    }

    /// Claim for the participant on turn, advance, and check for exhaustion.
    ///
    /// The winner is whoever is on turn *after* the filling claim, not the
    /// participant who made it.
    fn apply_claim(&mut self, x: usize, y: usize) -> Result<MoveOutcome, GameError> {
        let mover = self.roster.current_id()?;
        let name = self.roster.current()?.name();
        let report = self.board.claim(x, y, name)?;
        debug!(participant = %mover, name, x, y, blocked = report.blocked.len(), "cell claimed");

        self.roster.advance();

        if self.board.has_empty_cell() {
            return Ok(MoveOutcome::Continue);
        }

        let winner = self.roster.current_id()?;
        self.status = GameStatus::Finished;
        self.winner = Some(winner);
        info!(
            winner = %winner,
            name = self.winner_name().unwrap_or_default(),
            turns = self.roster.turn(),
            "game over"
        );
        Ok(MoveOutcome::GameOver { winner })
    }

    /// Play automated turns until a human is on turn or the game ends.
    fn run_automated_turns(&mut self) -> Result<MoveOutcome, GameError> {
        loop {
            let current = self.roster.current()?;
            if !current.is_automated() {
                return Ok(MoveOutcome::Continue);
            }

            let Some(coord) = current.choose_move(&self.board, &mut self.rng) else {
                warn!(name = current.name(), "strategy found no empty cell");
                return Ok(MoveOutcome::Continue);
            };

            if let outcome @ MoveOutcome::GameOver { .. } = self.apply_claim(coord.x, coord.y)? {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_humans_3x3() -> GameEngine {
        let config = GameConfig::two_players().with_dimensions(3, 3).with_seed(1);
        GameEngine::from_config(config).unwrap()
    }

    #[test]
    fn test_new_engine_not_started() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.board().width(), 6);
        assert_eq!(engine.board().height(), 6);
        assert!(engine.roster().is_empty());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.current_participant_name(), None);
    }

    #[test]
    fn test_current_participant() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.current_participant().unwrap_err(), GameError::EmptyRoster);

        engine.add_automated(StrategyKind::FirstEmpty).unwrap();
        engine.add_human("Player0").unwrap();
        assert!(engine.current_participant().unwrap().is_automated());

        engine.start().unwrap();
        let current = engine.current_participant().unwrap();
        assert!(!current.is_automated());
        assert_eq!(current.name(), "Player0");
    }

    #[test]
    fn test_start_empty_roster() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.start(), Err(GameError::EmptyRoster));
        assert_eq!(engine.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_start_twice() {
        let mut engine = two_humans_3x3();
        assert_eq!(engine.start(), Ok(MoveOutcome::Continue));
        assert_eq!(engine.start(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_configure_after_start_rejected() {
        let mut engine = two_humans_3x3();
        engine.start().unwrap();

        assert_eq!(
            engine.configure(GameConfig::two_players()),
            Err(GameError::AlreadyStarted)
        );
        assert_eq!(engine.add_human("Late"), Err(GameError::AlreadyStarted));
        assert_eq!(
            engine.add_automated(StrategyKind::FirstEmpty),
            Err(GameError::AlreadyStarted)
        );
    }

    #[test]
    fn test_configure_zero_dimensions() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.configure(GameConfig::default().with_dimensions(0, 4)),
            Err(GameError::InvalidDimensions { width: 0, height: 4 })
        );
        // Previous configuration still in place.
        assert_eq!(engine.board().width(), 6);
    }

    #[test]
    fn test_configure_overflowing_dimensions() {
        let config = GameConfig::two_players().with_dimensions(usize::MAX, 2);
        assert_eq!(
            GameEngine::from_config(config).unwrap_err(),
            GameError::InvalidDimensions { width: usize::MAX, height: 2 }
        );
    }

    #[test]
    fn test_move_before_start() {
        let mut engine = two_humans_3x3();
        assert_eq!(engine.submit_move(0, 0), Err(GameError::NotYourTurn));
        assert_eq!(engine.cell_state(0, 0), Some(CellState::Empty));
    }

    #[test]
    fn test_moves_alternate_and_record_owner() {
        let mut engine = two_humans_3x3();
        engine.start().unwrap();

        engine.submit_move(0, 0).unwrap();
        assert_eq!(engine.current_participant_name(), Some("Player1"));
        engine.submit_move(2, 2).unwrap();
        assert_eq!(engine.current_participant_name(), Some("Player0"));

        assert_eq!(engine.owner_of(0, 0), Some("Player0"));
        assert_eq!(engine.owner_of(2, 2), Some("Player1"));
    }

    #[test]
    fn test_winner_is_next_after_filling_move() {
        let mut engine = two_humans_3x3();
        engine.start().unwrap();

        // Five claims fill a 3x3 board; Player0 makes the last one.
        for (x, y) in [(0, 0), (2, 0), (1, 1), (0, 2)] {
            assert_eq!(engine.submit_move(x, y), Ok(MoveOutcome::Continue));
        }
        let outcome = engine.submit_move(2, 2).unwrap();

        assert_eq!(outcome, MoveOutcome::GameOver { winner: ParticipantId::new(1) });
        assert_eq!(engine.status(), GameStatus::Finished);
        assert_eq!(engine.winner_name(), Some("Player1"));
        assert_eq!(engine.submit_move(0, 1), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_add_participants_before_start() {
        let mut engine = GameEngine::new();
        let human = engine.add_human("Player0").unwrap();
        let bot = engine.add_automated(StrategyKind::FirstEmpty).unwrap();

        assert_eq!(human, ParticipantId::new(0));
        assert_eq!(bot, ParticipantId::new(1));
        assert_eq!(engine.roster().get(bot).unwrap().name(), "Bot2");
        assert_eq!(engine.config().participants.len(), 2);
    }

    #[test]
    fn test_reset_restores_fresh_game() {
        let mut engine = two_humans_3x3();
        engine.start().unwrap();
        engine.submit_move(1, 1).unwrap();

        engine.reset().unwrap();

        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.board().count(CellState::Empty), 9);
        assert_eq!(engine.roster().turn(), 0);
        assert_eq!(engine.roster().len(), 2);
        assert_eq!(engine.winner(), None);
        assert!(engine.start().is_ok());
    }

    #[test]
    fn test_rename_keeps_claimed_names() {
        let mut engine = two_humans_3x3();
        engine.start().unwrap();
        engine.submit_move(0, 0).unwrap();

        assert!(engine.rename(ParticipantId::new(0), "Alice"));
        assert!(!engine.rename(ParticipantId::new(5), "Ghost"));

        assert_eq!(engine.owner_of(0, 0), Some("Player0"));
        assert_eq!(engine.roster().get(ParticipantId::new(0)).unwrap().name(), "Alice");
    }
}
