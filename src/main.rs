//! Terminal front end for the blocking game.
//!
//! `play` runs an interactive game on stdin/stdout; `simulate` runs
//! all-bot games and tallies the winners.

use std::collections::BTreeMap;
use std::error::Error;
use std::io::{self, BufRead, Write};

use blocking_game::core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use blocking_game::{
    CellState, GameConfig, GameEngine, GameError, GameStatus, ParticipantSpec, StrategyKind,
};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "blocking-game")]
#[command(about = "Turn-based territory-claiming grid game")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game in the terminal
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Run games between bots and print who won
    Simulate {
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to simulate
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

#[derive(clap::Args, Clone)]
struct GameArgs {
    /// Board width (3-13)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Board height (3-10)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Claims also grab diagonal neighbors
    #[arg(long)]
    diagonal: bool,

    /// Seed for bot decisions
    #[arg(long)]
    seed: Option<u64>,

    /// Participant in play order: human:<name>, bot, bot:first or bot:random
    #[arg(short, long = "participant")]
    participants: Vec<ParticipantSpec>,
}

impl GameArgs {
    /// Build a validated config, falling back to `preset` participants.
    fn into_config(self, preset: GameConfig) -> Result<GameConfig, GameError> {
        let mut config = if self.participants.is_empty() {
            preset
        } else {
            GameConfig {
                participants: self.participants,
                ..GameConfig::default()
            }
        }
        .with_dimensions(self.width, self.height)
        .with_diagonal_capture(self.diagonal);
        config.seed = self.seed;

        config.validate()?;
        Ok(config)
    }
}

enum Input {
    Claim(usize, usize),
    Board,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let words: Vec<_> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        ["board"] | ["b"] => Input::Board,
        ["quit"] | ["q"] | ["exit"] => Input::Quit,
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Input::Claim(x, y),
            _ => Input::Invalid(format!("'{}' is not a coordinate", line.trim())),
        },
        _ => Input::Invalid("enter 'x y' to claim a cell, 'board' or 'quit'".to_string()),
    }
}

fn print_board(engine: &GameEngine) {
    print!("{}", engine.board());

    let claims: Vec<_> = engine
        .board()
        .iter()
        .filter(|&(_, state)| state == CellState::Claimed)
        .filter_map(|(c, _)| engine.owner_of(c.x, c.y).map(|owner| format!("{c} {owner}")))
        .collect();
    if !claims.is_empty() {
        println!("claims: {}", claims.join(", "));
    }
}

fn play(config: GameConfig) -> Result<(), Box<dyn Error>> {
    let mut engine = GameEngine::from_config(config)?;
    engine.start()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&engine);

        if engine.status() == GameStatus::Finished {
            println!("{} is the winner!", engine.winner_name().unwrap_or("nobody"));
            return Ok(());
        }

        print!("{} > ", engine.current_participant_name().unwrap_or("?"));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match parse_input(&line?) {
            Input::Claim(x, y) => match engine.submit_move(x, y) {
                Ok(outcome) => debug!(?outcome, "move applied"),
                Err(err @ GameError::IllegalMove { .. }) => println!("{err}, try again"),
                Err(err) => return Err(err.into()),
            },
            Input::Board => {}
            Input::Quit => return Ok(()),
            Input::Invalid(msg) => println!("{msg}"),
        }
    }
}

fn simulate(config: GameConfig, games: u32) -> Result<(), Box<dyn Error>> {
    if config
        .participants
        .iter()
        .any(|p| matches!(p, ParticipantSpec::Human { .. }))
    {
        return Err("simulate only accepts bot participants".into());
    }

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();

    for game in 0..games {
        let mut game_config = config.clone();
        game_config.seed = config.seed.map(|seed| seed.wrapping_add(u64::from(game)));

        let mut engine = GameEngine::from_config(game_config)?;
        engine.start()?;

        let winner = engine.winner_name().unwrap_or("nobody").to_string();
        info!(game, %winner, turns = engine.roster().turn(), "simulated game finished");
        *wins.entry(winner).or_default() += 1;
    }

    for (name, count) in &wins {
        println!("{name}: {count}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.command {
        Command::Play { game } => play(game.into_config(GameConfig::versus_computer())?),
        Command::Simulate { game, games } => {
            let preset = GameConfig::default()
                .with_bot(StrategyKind::RandomEmpty)
                .with_bot(StrategyKind::RandomEmpty);
            simulate(game.into_config(preset)?, games)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(participants: Vec<ParticipantSpec>) -> GameArgs {
        GameArgs {
            width: 4,
            height: 5,
            diagonal: true,
            seed: Some(3),
            participants,
        }
    }

    #[test]
    fn test_parse_input() {
        assert!(matches!(parse_input("2 3"), Input::Claim(2, 3)));
        assert!(matches!(parse_input(" 2, 3 "), Input::Claim(2, 3)));
        assert!(matches!(parse_input("board"), Input::Board));
        assert!(matches!(parse_input("q"), Input::Quit));
        assert!(matches!(parse_input("-1 3"), Input::Invalid(_)));
        assert!(matches!(parse_input("hello"), Input::Invalid(_)));
    }

    #[test]
    fn test_into_config_uses_preset() {
        let config = args(vec![]).into_config(GameConfig::versus_computer()).unwrap();

        assert_eq!(config.width, 4);
        assert_eq!(config.height, 5);
        assert!(config.diagonal_capture);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.participants, GameConfig::versus_computer().participants);
    }

    #[test]
    fn test_into_config_explicit_participants() {
        let config = args(vec![ParticipantSpec::human("Alice")])
            .into_config(GameConfig::versus_computer())
            .unwrap();

        assert_eq!(config.participants, vec![ParticipantSpec::human("Alice")]);
    }

    #[test]
    fn test_into_config_rejects_bounds() {
        let mut bad = args(vec![]);
        bad.width = 20;

        assert_eq!(
            bad.into_config(GameConfig::two_players()),
            Err(GameError::InvalidDimensions { width: 20, height: 5 })
        );
    }

    #[test]
    fn test_simulate_rejects_humans() {
        assert!(simulate(GameConfig::two_players(), 1).is_err());
    }
}
