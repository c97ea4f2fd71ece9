//! # rust-pig
//!
//! The dice game Pig for two players, human or computer, with an optional
//! wall-clock limit.
//!
//! ## Rules
//!
//! On your turn, roll a six-sided die as often as you like. Each roll adds
//! to your turn score, unless you roll a 1: then the turn score is lost and
//! the turn passes. Hold to bank the turn score. The first player to bank
//! 100 wins. In a timed game, when the clock runs out the higher score wins.
//!
//! ## Modules
//!
//! - `core`: Players, decisions, die rolls, configuration, game state
//! - `rules`: Continuation checks for plain and timed games
//! - `players`: Human and computer decision makers
//! - `events`: Game narration and the sinks that present it
//! - `driver`: The game loop
//! - `session`: Launch options and game assembly
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use rust_pig::{ComputerPlayer, GameConfig, GameDriver, GameRng, GameState, RecordingSink};
//!
//! let config = GameConfig::default().with_think_delay(Duration::ZERO);
//! let mut game = GameState::new(
//!     ["Computer 1".to_string(), "Computer 2".to_string()],
//!     &config,
//!     Box::new(GameRng::new(42)),
//! );
//! let mut driver = GameDriver::new([
//!     Box::new(ComputerPlayer::new(&config)),
//!     Box::new(ComputerPlayer::new(&config)),
//! ]);
//!
//! let result = driver.run(&mut game, &mut RecordingSink::new()).unwrap();
//! assert!(result.score >= 100);
//! ```

pub mod core;
pub mod driver;
pub mod error;
pub mod events;
pub mod players;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Decision, DecisionRecord, GameConfig, GameRng, GameSnapshot, GameState, Player, PlayerId,
    PlayerKind, RandomSource, ScriptedRolls, TargetCheck,
};

pub use crate::driver::GameDriver;
pub use crate::error::{ConfigError, PigError};
pub use crate::events::{ConsoleSink, EventSink, GameEvent, LogSink, RecordingSink};
pub use crate::players::{
    ComputerPlayer, ConsoleInput, DecisionMaker, HumanPlayer, InputSource, ScriptedInput, TurnView,
};
pub use crate::rules::{GameResult, PigRules, Progress, TimedGame, WinReason};
pub use crate::session::{Command, LaunchOptions, Session};
