//! Game configuration types.
//!
//! - `GameConfig`: rule constants and pacing for one game
//! - `TargetCheck`: how the timed variant compares a score to the target
//! - `PlayerKind`: who sits in a seat, parsed from a launch argument

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Score that wins outright.
pub const TARGET_SCORE: u32 = 100;

/// Faces on the die.
pub const DIE_SIDES: u8 = 6;

/// The die face that ends a turn and forfeits the turn score.
pub const BUST_FACE: u8 = 1;

/// Most turn points the computer will risk before holding.
pub const DEFAULT_RISK_CAP: u32 = 25;

/// Score comparison used by the timed variant's early-exit check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetCheck {
    /// `score >= target`, the same test an untimed game uses.
    #[default]
    Reached,
    /// `score > target`. A player sitting on exactly the target keeps
    /// playing until the clock runs out.
    Exceeded,
}

impl TargetCheck {
    /// Does `score` satisfy this check against `target`?
    #[must_use]
    pub fn met(self, score: u32, target: u32) -> bool {
        match self {
            TargetCheck::Reached => score >= target,
            TargetCheck::Exceeded => score > target,
        }
    }
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score that wins outright (always 100 from the command line).
    pub target_score: u32,

    /// Faces on the die.
    pub die_sides: u8,

    /// Computer risk cap: it holds once the turn score exceeds
    /// `min(target - score, risk_cap)`.
    pub risk_cap: u32,

    /// Cosmetic pause before the computer rolls. Zero disables it.
    pub think_delay: Duration,

    /// Wall-clock limit for timed games.
    pub time_limit: Duration,

    /// Target comparison for timed games.
    pub target_check: TargetCheck,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: TARGET_SCORE,
            die_sides: DIE_SIDES,
            risk_cap: DEFAULT_RISK_CAP,
            think_delay: Duration::from_millis(500),
            time_limit: Duration::from_secs(60),
            target_check: TargetCheck::Reached,
        }
    }
}

impl GameConfig {
    /// Set the computer pacing delay.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Set the timed-game limit.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Set the timed-game target comparison.
    #[must_use]
    pub fn with_target_check(mut self, check: TargetCheck) -> Self {
        self.target_check = check;
        self
    }

    /// Set the computer risk cap.
    #[must_use]
    pub fn with_risk_cap(mut self, cap: u32) -> Self {
        self.risk_cap = cap;
        self
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    /// Parse a seat argument by its first letter (`h...` or `c...`).
    ///
    /// `flag` names the option in the error.
    pub fn parse(flag: &'static str, value: Option<&str>) -> Result<Self, ConfigError> {
        let value = value.ok_or(ConfigError::MissingPlayerKind { flag })?;

        match value.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Ok(PlayerKind::Human),
            Some('c') => Ok(PlayerKind::Computer),
            _ => Err(ConfigError::UnknownPlayerKind {
                flag,
                value: value.to_string(),
            }),
        }
    }

    /// Label used in default player names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Computer => "Computer",
        }
    }
}

/// Parse the timed-mode flag by its first letter.
///
/// `y...` is timed, `n...` is untimed. Anything else, including a missing
/// value, is `MalformedTimedFlag`. Launch code recovers from that error by
/// playing untimed.
pub fn parse_timed_flag(value: Option<&str>) -> Result<bool, ConfigError> {
    let raw = value.unwrap_or_default();
    match raw.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        _ => Err(ConfigError::MalformedTimedFlag(raw.to_string())),
    }
}
