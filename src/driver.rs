//! The game loop.
//!
//! ```text
//! announce the opening player
//! while the rules say continue:
//!     ask the current seat's decision maker
//!     apply the decision, narrating the transition
//! announce the winner
//! ```

use log::info;

use crate::core::PlayerId;
use crate::error::PigError;
use crate::events::{EventSink, GameEvent};
use crate::players::{DecisionMaker, TurnView};
use crate::rules::{GameResult, PigRules, Progress, WinReason};

/// Runs one game to completion.
pub struct GameDriver<'a> {
    seats: [Box<dyn DecisionMaker + 'a>; 2],
}

impl<'a> GameDriver<'a> {
    /// Decision makers in seat order.
    pub fn new(seats: [Box<dyn DecisionMaker + 'a>; 2]) -> Self {
        Self { seats }
    }

    /// Play `game` until the rules call it, narrating into `sink`.
    pub fn run(
        &mut self,
        game: &mut dyn PigRules,
        sink: &mut dyn EventSink,
    ) -> Result<GameResult, PigError> {
        let state = game.state();
        info!(
            "starting game: {} vs {}",
            state.player(PlayerId::FIRST).name,
            state.player(PlayerId::SECOND).name
        );
        sink.emit(&GameEvent::UpFirst {
            player: state.current(),
            name: state.current_player().name.clone(),
        });

        let result = loop {
            match game.progress() {
                Progress::Over(result) => break result,
                Progress::Continue { time_left } => {
                    if let Some(left) = time_left {
                        sink.emit(&GameEvent::TimeRemaining {
                            seconds: round_tenths(left.as_secs_f64()),
                        });
                    }

                    let state = game.state();
                    let seat = state.current();
                    let decision = self.seats[seat.index()].decide(&TurnView::of(state))?;
                    sink.emit_all(&game.apply_decision(decision));
                }
            }
        };

        if result.reason == WinReason::TimeExpired {
            sink.emit(&GameEvent::TimeUp);
        }
        sink.emit(&GameEvent::GameOver {
            winner: result.winner,
            name: result.name.clone(),
            score: result.score,
        });
        info!(
            "{} won with {} ({:?}) after {} decisions",
            result.name,
            result.score,
            result.reason,
            game.state().history().len()
        );

        Ok(result)
    }
}

fn round_tenths(seconds: f64) -> f64 {
    (seconds * 10.0).round() / 10.0
}
