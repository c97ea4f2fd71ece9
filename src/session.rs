//! Launch options and game assembly.
//!
//! `LaunchOptions::parse` validates the command line before anything is
//! built: a bad player kind is fatal, a bad timed flag is not.

use std::time::Duration;

use log::{info, warn};

use crate::core::{parse_timed_flag, GameConfig, GameRng, GameState, PlayerKind};
use crate::error::ConfigError;
use crate::players::{ComputerPlayer, ConsoleInput, DecisionMaker, HumanPlayer};
use crate::rules::{PigRules, TimedGame};

pub const USAGE: &str = r#"pig

USAGE:
    pig --player1 <human|computer> --player2 <human|computer> [OPTIONS]

OPTIONS:
    --player1 KIND     Who plays seat 1 (matched by first letter)
    --player2 KIND     Who plays seat 2 (matched by first letter)
    --timed yes|no     Call the game after the time limit (default: no)
    --time-limit S     Seconds in a timed game (default: 60)
    --seed N           RNG seed for a reproducible game
    --think-ms MS      Computer pause before each roll (default: 500)
    -h, --help         Print this help
"#;

/// Validated launch configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchOptions {
    pub players: [PlayerKind; 2],
    pub timed: bool,
    pub seed: Option<u64>,
    pub config: GameConfig,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Play(LaunchOptions),
    Help,
}

impl LaunchOptions {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        let mut player1 = None;
        let mut player2 = None;
        let mut timed = None;
        let mut seed = None;
        let mut config = GameConfig::default();

        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if matches!(flag, "-h" | "--help") {
                return Ok(Command::Help);
            }

            let value = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;

            match flag {
                "--player1" => player1 = Some(value),
                "--player2" => player2 = Some(value),
                "--timed" => timed = Some(value),
                "--seed" => seed = Some(parse_number(flag, &value)?),
                "--time-limit" => {
                    config.time_limit = Duration::from_secs(parse_number(flag, &value)?);
                }
                "--think-ms" => {
                    config.think_delay = Duration::from_millis(parse_number(flag, &value)?);
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
            i += 2;
        }

        let players = [
            PlayerKind::parse("--player1", player1.as_deref())?,
            PlayerKind::parse("--player2", player2.as_deref())?,
        ];

        let timed = parse_timed_flag(timed.as_deref()).unwrap_or_else(|err| {
            warn!("{err}; playing untimed");
            false
        });

        Ok(Command::Play(Self {
            players,
            timed,
            seed,
            config,
        }))
    }

    /// Display names: kind and seat number, e.g. "Computer 2".
    #[must_use]
    pub fn names(&self) -> [String; 2] {
        [
            format!("{} 1", self.players[0].label()),
            format!("{} 2", self.players[1].label()),
        ]
    }
}

fn parse_number(flag: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// A game ready to hand to the driver.
pub struct Session {
    pub game: Box<dyn PigRules>,
    pub seats: [Box<dyn DecisionMaker>; 2],
    pub seed: u64,
}

impl Session {
    /// Build the game and its decision makers. Human seats read the console.
    #[must_use]
    pub fn build(options: &LaunchOptions) -> Self {
        let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        info!("seed {seed}, timed: {}", options.timed);

        let state = GameState::new(options.names(), &options.config, Box::new(rng));
        let game: Box<dyn PigRules> = if options.timed {
            Box::new(TimedGame::new(state, &options.config))
        } else {
            Box::new(state)
        };

        let seats = options.players.map(|kind| -> Box<dyn DecisionMaker> {
            match kind {
                PlayerKind::Human => Box::new(HumanPlayer::new(ConsoleInput)),
                PlayerKind::Computer => Box::new(ComputerPlayer::new(&options.config)),
            }
        });

        Self { game, seats, seed }
    }
}
