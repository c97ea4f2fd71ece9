//! Computer player: hold once the turn is worth enough.

use std::time::Duration;

use crate::core::{Decision, GameConfig};
use crate::error::PigError;

use super::{DecisionMaker, TurnView};

/// Fixed-threshold policy.
///
/// The computer keeps rolling until its turn score exceeds
/// `min(target - score, risk_cap)`. Far from the target that is the risk cap;
/// close to it, the computer holds as soon as banking would win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputerPlayer {
    risk_cap: u32,
    think_delay: Duration,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            risk_cap: config.risk_cap,
            think_delay: config.think_delay,
        }
    }

    /// Turn score above which the computer holds.
    #[must_use]
    pub fn threshold(&self, view: &TurnView<'_>) -> u32 {
        view.target_score.saturating_sub(view.score).min(self.risk_cap)
    }

    /// The policy itself, without the pacing delay.
    #[must_use]
    pub fn choose(&self, view: &TurnView<'_>) -> Decision {
        if view.turn_score > self.threshold(view) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

impl DecisionMaker for ComputerPlayer {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, PigError> {
        let decision = self.choose(view);
        if decision == Decision::Roll && !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        Ok(decision)
    }
}
