//! Die rolls: the `RandomSource` seam plus its seeded and scripted forms.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Substitutable**: `GameState` owns a `Box<dyn RandomSource>`, so tests
//!   can inject a fixed roll sequence
//!
//! ```
//! use rust_pig::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let roll = rng1.roll(6);
//! assert!((1..=6).contains(&roll));
//! assert_eq!(roll, rng2.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of die rolls.
///
/// Implementations must return a value in `[1, sides]` and never fail.
pub trait RandomSource {
    /// Roll a die with `sides` faces.
    fn roll(&mut self, sides: u8) -> u8;
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from process entropy.
    ///
    /// The seed stays readable through [`GameRng::seed`] so a game can be
    /// replayed with `--seed`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.gen_range(1..=sides.max(1))
    }
}

/// Replays a fixed roll sequence, cycling when it runs out.
///
/// Values are folded into `[1, sides]`, so a script of die faces also works
/// for the coin-flip that picks the starting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedRolls {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a scripted source. An empty script always rolls 1.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u8>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        if self.rolls.is_empty() {
            return 1;
        }

        let raw = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        (raw.max(1) - 1) % sides + 1
    }
}
