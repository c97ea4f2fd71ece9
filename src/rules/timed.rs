//! Timed games: a `GameState` with a wall-clock deadline.
//!
//! Expiry is only noticed when `progress` is polled between decisions. A
//! decision already in flight, such as a human typing, is never cut short.

use std::time::{Duration, Instant};

use crate::core::{Decision, GameConfig, GameState, PlayerId, TargetCheck};
use crate::events::GameEvent;

use super::engine::{GameResult, PigRules, Progress, WinReason};

/// Winner when the clock runs out on a tied score.
pub const TIME_UP_TIE_WINNER: PlayerId = PlayerId::SECOND;

/// A game that is called when its time limit passes.
#[derive(Debug)]
pub struct TimedGame {
    game: GameState,
    started: Instant,
    time_limit: Duration,
    target_check: TargetCheck,
}

impl TimedGame {
    /// Wrap `game`, starting the clock now.
    #[must_use]
    pub fn new(game: GameState, config: &GameConfig) -> Self {
        Self::started_at(game, config, Instant::now())
    }

    /// Wrap `game` with an explicit start instant.
    #[must_use]
    pub fn started_at(game: GameState, config: &GameConfig, started: Instant) -> Self {
        Self {
            game,
            started,
            time_limit: config.time_limit,
            target_check: config.target_check,
        }
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Continuation check against an explicit `now`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Progress {
        let state = &self.game;
        let current = state.current();

        if self
            .target_check
            .met(state.current_player().score(), state.target_score())
        {
            return Progress::Over(GameResult::from_state(state, current, WinReason::ReachedTarget));
        }

        let elapsed = now.saturating_duration_since(self.started);
        if elapsed > self.time_limit {
            return Progress::Over(GameResult::from_state(
                state,
                self.leader(),
                WinReason::TimeExpired,
            ));
        }

        Progress::Continue {
            time_left: Some(self.time_limit - elapsed),
        }
    }

    /// Strictly higher score wins; a tie goes to [`TIME_UP_TIE_WINNER`].
    fn leader(&self) -> PlayerId {
        let first = self.game.player(PlayerId::FIRST).score();
        let second = self.game.player(PlayerId::SECOND).score();

        if first > second {
            PlayerId::FIRST
        } else if second > first {
            PlayerId::SECOND
        } else {
            TIME_UP_TIE_WINNER
        }
    }
}

impl PigRules for TimedGame {
    fn state(&self) -> &GameState {
        &self.game
    }

    fn apply_decision(&mut self, decision: Decision) -> Vec<GameEvent> {
        self.game.apply_decision(decision)
    }

    fn progress(&self) -> Progress {
        self.progress_at(Instant::now())
    }
}
