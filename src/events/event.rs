//! Game event types.
//!
//! Events are the narration of a game: who is up, what the die showed, what
//! was banked, how much time is left. The state machine and driver produce
//! them; an `EventSink` decides how to present them.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The randomly chosen opening player.
    UpFirst { player: PlayerId, name: String },

    /// The current player rolled a non-bust value.
    Rolled {
        player: PlayerId,
        name: String,
        value: u8,
        turn_score: u32,
        score: u32,
    },

    /// The current player rolled a 1 and lost the turn score.
    Bust {
        player: PlayerId,
        name: String,
        lost: u32,
        score: u32,
    },

    /// The current player banked their turn score.
    Banked {
        player: PlayerId,
        name: String,
        banked: u32,
        score: u32,
    },

    /// The turn passed to another player.
    NextUp {
        player: PlayerId,
        name: String,
        score: u32,
    },

    /// Timed games only: time left before the game is called.
    TimeRemaining { seconds: f64 },

    /// Timed games only: the clock ran out.
    TimeUp,

    /// Final outcome.
    GameOver {
        winner: PlayerId,
        name: String,
        score: u32,
    },
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::UpFirst { player, .. }
            | GameEvent::Rolled { player, .. }
            | GameEvent::Bust { player, .. }
            | GameEvent::Banked { player, .. }
            | GameEvent::NextUp { player, .. } => Some(*player),
            GameEvent::GameOver { winner, .. } => Some(*winner),
            GameEvent::TimeRemaining { .. } | GameEvent::TimeUp => None,
        }
    }
}

/// Console narration.
impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::UpFirst { name, .. } => write!(f, "Up first is {name}"),
            GameEvent::Rolled {
                name,
                value,
                turn_score,
                score,
                ..
            } => write!(
                f,
                "\n{name}, you rolled {value}\n\
                 Your score this turn is {turn_score}\n\
                 Your overall saved score is {score}\n"
            ),
            GameEvent::Bust {
                name, lost, score, ..
            } => write!(
                f,
                "\n{name}, you rolled 1\n\
                 You rolled a 1 so your turn is over. You lost {lost} possible points.\n\
                 Your current score is {score}\n"
            ),
            GameEvent::Banked { score, .. } => writeln!(f, "You decided to keep {score}"),
            GameEvent::NextUp { name, score, .. } => {
                write!(f, "Next up: {name}\nYour current score: {score}")
            }
            GameEvent::TimeRemaining { seconds } => {
                write!(f, "There are {seconds:.1} seconds left in the game")
            }
            GameEvent::TimeUp => write!(f, "\n Time is up! Game Over!"),
            GameEvent::GameOver { name, score, .. } => write!(
                f,
                "\n*******************\n\n\
                 {name} wins with a score of {score}\n\n\
                 *******************"
            ),
        }
    }
}
