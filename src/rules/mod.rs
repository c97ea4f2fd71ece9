//! Rules: when a game continues and who wins.
//!
//! - `GameState` implements `PigRules` directly: the game ends when the
//!   current player reaches the target.
//! - `TimedGame` wraps a `GameState` and also ends the game when its
//!   clock runs out.

pub mod engine;
pub mod timed;

pub use engine::{GameResult, PigRules, Progress, WinReason};
pub use timed::{TimedGame, TIME_UP_TIE_WINNER};
