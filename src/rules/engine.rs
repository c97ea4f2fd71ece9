//! Rules trait shared by plain and timed games.
//!
//! The driver only talks to `PigRules`:
//! - `state`: read the current position
//! - `apply_decision`: run a roll or hold transition
//! - `progress`: decide whether play continues, and who won if not

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Decision, GameState, PlayerId};
use crate::events::GameEvent;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner banked enough to reach the target.
    ReachedTarget,
    /// The clock ran out; the higher score won.
    TimeExpired,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    pub score: u32,
    pub reason: WinReason,
}

impl GameResult {
    /// Build a result naming `winner` from `state`.
    #[must_use]
    pub fn from_state(state: &GameState, winner: PlayerId, reason: WinReason) -> Self {
        let player = state.player(winner);
        Self {
            winner,
            name: player.name.clone(),
            score: player.score(),
            reason,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Outcome of a continuation check.
#[derive(Clone, Debug, PartialEq)]
pub enum Progress {
    /// Another decision is due. Timed games report the time left.
    Continue { time_left: Option<Duration> },
    /// The game is over.
    Over(GameResult),
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `progress` must not mutate anything: calling it twice in a row gives
///   the same answer.
/// - `apply_decision` returns the events the transition produced.
pub trait PigRules {
    /// The wrapped game state.
    fn state(&self) -> &GameState;

    /// Apply a decision for the current player.
    fn apply_decision(&mut self, decision: Decision) -> Vec<GameEvent>;

    /// Check whether play continues.
    fn progress(&self) -> Progress;

    /// Convenience form of [`PigRules::progress`].
    fn continue_to_play(&self) -> bool {
        matches!(self.progress(), Progress::Continue { .. })
    }
}

impl PigRules for GameState {
    fn state(&self) -> &GameState {
        self
    }

    fn apply_decision(&mut self, decision: Decision) -> Vec<GameEvent> {
        GameState::apply_decision(self, decision)
    }

    fn progress(&self) -> Progress {
        match self.winner() {
            Some(winner) => Progress::Over(GameResult::from_state(
                self,
                winner,
                WinReason::ReachedTarget,
            )),
            None => Progress::Continue { time_left: None },
        }
    }
}
