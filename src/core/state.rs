//! Game state: the Pig turn machine.
//!
//! ## GameState
//!
//! Owns both players, the unbanked turn score, whose turn it is, the target
//! score, the die and the decision history. A turn is a run of rolls ended
//! either by a bust (rolling a 1, forfeiting the turn score) or by a hold
//! (banking the turn score).
//!
//! ## GameSnapshot
//!
//! Serializable, comparable view of the observable state.

use log::debug;
use serde::{Deserialize, Serialize};

use super::action::{Decision, DecisionRecord};
use super::config::{GameConfig, BUST_FACE};
use super::player::{Player, PlayerId};
use super::rng::RandomSource;
use crate::events::GameEvent;

/// Observable game state, without the die.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: [Player; 2],
    pub current: PlayerId,
    pub turn_score: u32,
    pub target_score: u32,
    pub turn_number: u32,
}

/// Full game state.
pub struct GameState {
    players: [Player; 2],

    /// Seat whose turn it is.
    current: PlayerId,

    /// Unbanked points this turn. Zero at the start of every turn.
    turn_score: u32,

    target_score: u32,
    die_sides: u8,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Decision sequence within the turn.
    sequence: u32,

    rng: Box<dyn RandomSource>,
    history: Vec<DecisionRecord>,
}

impl GameState {
    /// Create a new game. The opening player is picked with a coin flip
    /// from `rng`.
    #[must_use]
    pub fn new(names: [String; 2], config: &GameConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let first = PlayerId::new(rng.roll(2).saturating_sub(1) % 2);
        Self::with_starting_player(names, config, rng, first)
    }

    /// Create a new game with a fixed opening player.
    #[must_use]
    pub fn with_starting_player(
        names: [String; 2],
        config: &GameConfig,
        rng: Box<dyn RandomSource>,
        first: PlayerId,
    ) -> Self {
        let [a, b] = names;
        Self {
            players: [Player::new(a), Player::new(b)],
            current: first,
            turn_score: 0,
            target_score: config.target_score,
            die_sides: config.die_sides,
            turn_number: 1,
            sequence: 0,
            rng,
            history: Vec::new(),
        }
    }

    /// Resume from banked scores, e.g. to set up a position.
    #[must_use]
    pub fn with_scores(mut self, scores: [u32; 2]) -> Self {
        for (player, score) in self.players.iter_mut().zip(scores) {
            *player = Player::with_score(std::mem::take(&mut player.name), score);
        }
        self
    }

    // === Accessors ===

    /// Both players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// A player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Unbanked points this turn.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every decision applied so far.
    #[must_use]
    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    /// The current player, if their banked score has reached the target.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        (self.current_player().score() >= self.target_score).then_some(self.current)
    }

    /// True while the current player is below the target.
    #[must_use]
    pub fn continue_to_play(&self) -> bool {
        self.winner().is_none()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            current: self.current,
            turn_score: self.turn_score,
            target_score: self.target_score,
            turn_number: self.turn_number,
        }
    }

    // === Transitions ===

    /// Apply a decision for the current player.
    pub fn apply_decision(&mut self, decision: Decision) -> Vec<GameEvent> {
        match decision {
            Decision::Roll => self.roll(),
            Decision::Hold => self.hold(),
        }
    }

    /// Roll the die. A 1 busts and passes the turn; anything else is added
    /// to the turn score.
    pub fn roll(&mut self) -> Vec<GameEvent> {
        let player = self.current;
        let value = self.rng.roll(self.die_sides);
        self.record(Decision::Roll, Some(value));

        let name = self.current_player().name.clone();
        let score = self.current_player().score();

        if value == BUST_FACE {
            let lost = self.turn_score;
            debug!("{name} busted, losing {lost} turn points");

            let mut events = vec![GameEvent::Bust {
                player,
                name,
                lost,
                score,
            }];
            events.push(self.switch_turn());
            events
        } else {
            self.turn_score += u32::from(value);
            debug!("{name} rolled {value}, turn score {}", self.turn_score);

            vec![GameEvent::Rolled {
                player,
                name,
                value,
                turn_score: self.turn_score,
                score,
            }]
        }
    }

    /// Bank the turn score. The turn passes unless the bank reached the
    /// target, in which case the current player stays current as winner.
    pub fn hold(&mut self) -> Vec<GameEvent> {
        let player = self.current;
        let banked = self.turn_score;
        self.record(Decision::Hold, None);

        self.players[player.index()].bank(banked);
        self.turn_score = 0;

        let current = self.current_player();
        debug!("{} banked {banked}, score {}", current.name, current.score());

        let mut events = vec![GameEvent::Banked {
            player,
            name: current.name.clone(),
            banked,
            score: current.score(),
        }];
        if self.continue_to_play() {
            events.push(self.switch_turn());
        }
        events
    }

    /// Pass the turn to the other player and clear the turn score.
    pub fn switch_turn(&mut self) -> GameEvent {
        self.current = self.current.other();
        self.turn_score = 0;
        self.turn_number += 1;
        self.sequence = 0;

        let next = self.current_player();
        GameEvent::NextUp {
            player: self.current,
            name: next.name.clone(),
            score: next.score(),
        }
    }

    fn record(&mut self, decision: Decision, rolled: Option<u8>) {
        self.history.push(DecisionRecord {
            player: self.current,
            decision,
            rolled,
            turn: self.turn_number,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turn_score", &self.turn_score)
            .field("target_score", &self.target_score)
            .field("turn_number", &self.turn_number)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRolls;

    fn names() -> [String; 2] {
        ["Computer 1".to_string(), "Computer 2".to_string()]
    }

    fn scripted(rolls: &[u8]) -> GameState {
        GameState::with_starting_player(
            names(),
            &GameConfig::default(),
            Box::new(ScriptedRolls::new(rolls.to_vec())),
            PlayerId::FIRST,
        )
    }

    #[test]
    fn test_new_picks_starting_player_from_rng() {
        let rolls = Box::new(ScriptedRolls::new(vec![2]));
        let state = GameState::new(names(), &GameConfig::default(), rolls);
        assert_eq!(state.current(), PlayerId::SECOND);

        let rolls = Box::new(ScriptedRolls::new(vec![1]));
        let state = GameState::new(names(), &GameConfig::default(), rolls);
        assert_eq!(state.current(), PlayerId::FIRST);
    }

    #[test]
    fn test_initial_state() {
        let state = scripted(&[4]);

        assert_eq!(state.turn_score(), 0);
        assert_eq!(state.target_score(), 100);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.players()[0].score(), 0);
        assert_eq!(state.players()[1].score(), 0);
        assert!(state.continue_to_play());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_roll_adds_to_turn_score() {
        let mut state = scripted(&[4, 6]);

        state.roll();
        state.roll();

        assert_eq!(state.turn_score(), 10);
        assert_eq!(state.current(), PlayerId::FIRST);
    }

    #[test]
    fn test_roll_one_busts() {
        let mut state = scripted(&[5, 1]);

        state.roll();
        let events = state.roll();

        assert_eq!(state.turn_score(), 0);
        assert_eq!(state.current(), PlayerId::SECOND);
        assert_eq!(state.player(PlayerId::FIRST).score(), 0);
        assert!(matches!(events[0], GameEvent::Bust { lost: 5, .. }));
        assert!(matches!(events[1], GameEvent::NextUp { player: PlayerId::SECOND, .. }));
    }

    #[test]
    fn test_hold_banks_and_passes() {
        let mut state = scripted(&[6, 3]);

        state.roll();
        state.roll();
        let events = state.hold();

        assert_eq!(state.player(PlayerId::FIRST).score(), 9);
        assert_eq!(state.turn_score(), 0);
        assert_eq!(state.current(), PlayerId::SECOND);
        assert_eq!(state.turn_number(), 2);
        assert!(matches!(events[0], GameEvent::Banked { banked: 9, score: 9, .. }));
    }

    #[test]
    fn test_hold_reaching_target_ends_game() {
        let mut state = scripted(&[6]).with_scores([95, 50]);

        state.roll();
        let events = state.hold();

        assert_eq!(state.player(PlayerId::FIRST).score(), 101);
        assert_eq!(state.current(), PlayerId::FIRST);
        assert_eq!(state.winner(), Some(PlayerId::FIRST));
        assert!(!state.continue_to_play());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_hold_on_exact_target_wins() {
        let mut state = scripted(&[5]).with_scores([95, 0]);

        state.roll();
        state.hold();

        assert_eq!(state.winner(), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_switch_turn_resets_turn_score() {
        let mut state = scripted(&[3]);
        state.roll();

        state.switch_turn();

        assert_eq!(state.turn_score(), 0);
        assert_eq!(state.current(), PlayerId::SECOND);
    }

    #[test]
    fn test_history_records_decisions() {
        let mut state = scripted(&[4, 1]);

        state.apply_decision(Decision::Roll);
        state.apply_decision(Decision::Roll);
        state.apply_decision(Decision::Hold);

        let history = state.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].rolled, Some(4));
        assert_eq!((history[0].turn, history[0].sequence), (1, 0));
        assert!(history[1].is_bust());
        assert_eq!((history[1].turn, history[1].sequence), (1, 1));
        assert_eq!(history[2].player, PlayerId::SECOND);
        assert_eq!((history[2].turn, history[2].sequence), (2, 0));
    }

    #[test]
    fn test_with_scores_keeps_names() {
        let state = scripted(&[2]).with_scores([10, 20]);

        assert_eq!(state.players()[0].name, "Computer 1");
        assert_eq!(state.players()[1].score(), 20);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = scripted(&[3]).with_scores([12, 40]);
        state.roll();

        let snapshot = state.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.turn_score, 3);
    }
}
