//! Core game types: players, decisions, die rolls, configuration, state.
//!
//! Everything here is independent of how a game is presented or timed.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Decision, DecisionRecord};
pub use config::{
    parse_timed_flag, GameConfig, PlayerKind, TargetCheck, BUST_FACE, DIE_SIDES, TARGET_SCORE,
};
pub use player::{Player, PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, RandomSource, ScriptedRolls};
pub use state::{GameSnapshot, GameState};
