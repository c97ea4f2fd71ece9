//! Decisions and the history of applied decisions.
//!
//! Pig has exactly two moves on a turn: roll the die again, or hold and bank
//! the turn score. A `DecisionRecord` remembers who decided what, and what
//! the die showed if they rolled.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player's choice for the next step of their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the turn score and end the turn.
    Hold,
}

impl Decision {
    /// Parse a free-form response.
    ///
    /// Only the first non-blank character counts, case-insensitively:
    /// `r...` is Roll, `h...` is Hold, anything else is `None`.
    ///
    /// ```
    /// use rust_pig::core::Decision;
    ///
    /// assert_eq!(Decision::parse("Roll"), Some(Decision::Roll));
    /// assert_eq!(Decision::parse(" h"), Some(Decision::Hold));
    /// assert_eq!(Decision::parse("quit"), None);
    /// ```
    #[must_use]
    pub fn parse(response: &str) -> Option<Self> {
        match response.trim_start().chars().next()?.to_ascii_lowercase() {
            'r' => Some(Decision::Roll),
            'h' => Some(Decision::Hold),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Roll => write!(f, "roll"),
            Decision::Hold => write!(f, "hold"),
        }
    }
}

/// An applied decision with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// The player who decided.
    pub player: PlayerId,

    /// The decision taken.
    pub decision: Decision,

    /// Die value for a roll, `None` for a hold.
    pub rolled: Option<u8>,

    /// Turn number when the decision was applied (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl DecisionRecord {
    /// Did this decision end in a bust?
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.rolled == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_letter() {
        assert_eq!(Decision::parse("r"), Some(Decision::Roll));
        assert_eq!(Decision::parse("ROLL"), Some(Decision::Roll));
        assert_eq!(Decision::parse("rhubarb"), Some(Decision::Roll));
        assert_eq!(Decision::parse("H"), Some(Decision::Hold));
        assert_eq!(Decision::parse("hold\n"), Some(Decision::Hold));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(Decision::parse(""), None);
        assert_eq!(Decision::parse("   "), None);
        assert_eq!(Decision::parse("yes"), None);
        assert_eq!(Decision::parse("1"), None);
    }

    #[test]
    fn test_record_bust() {
        let bust = DecisionRecord {
            player: PlayerId::FIRST,
            decision: Decision::Roll,
            rolled: Some(1),
            turn: 1,
            sequence: 0,
        };
        let hold = DecisionRecord {
            decision: Decision::Hold,
            rolled: None,
            ..bust.clone()
        };

        assert!(bust.is_bust());
        assert!(!hold.is_bust());
    }

    #[test]
    fn test_record_serialization() {
        let record = DecisionRecord {
            player: PlayerId::SECOND,
            decision: Decision::Roll,
            rolled: Some(4),
            turn: 3,
            sequence: 2,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: DecisionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
