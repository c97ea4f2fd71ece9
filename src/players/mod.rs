//! Decision makers: who chooses between rolling and holding.
//!
//! A seat is controlled either by a person (`HumanPlayer`, reading from an
//! `InputSource`) or by the fixed heuristic in `ComputerPlayer`.

pub mod computer;
pub mod human;

pub use computer::ComputerPlayer;
pub use human::{ConsoleInput, HumanPlayer, InputSource, ScriptedInput};

use crate::core::{Decision, GameState};
use crate::error::PigError;

/// What a decision maker sees when asked for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnView<'a> {
    pub name: &'a str,
    /// Banked score.
    pub score: u32,
    /// Unbanked points accumulated so far this turn.
    pub turn_score: u32,
    pub target_score: u32,
}

impl<'a> TurnView<'a> {
    /// View for the current player of `state`.
    #[must_use]
    pub fn of(state: &'a GameState) -> Self {
        let player = state.current_player();
        Self {
            name: &player.name,
            score: player.score(),
            turn_score: state.turn_score(),
            target_score: state.target_score(),
        }
    }
}

/// Chooses Roll or Hold for the player whose turn it is.
pub trait DecisionMaker {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, PigError>;
}

impl<T: DecisionMaker + ?Sized> DecisionMaker for Box<T> {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, PigError> {
        (**self).decide(view)
    }
}
