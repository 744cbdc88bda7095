//! Game configuration.
//!
//! Only the table setup is configurable: the RNG seed, the starting
//! balance and how many participants may sit down. Rule constants
//! (prices, rents, taxes) are fixed.

use serde::{Deserialize, Serialize};

/// Balance every participant starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: i64 = 1500;

/// Table setup for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the single game-wide RNG.
    /// Same seed and same decisions produce the same game.
    pub seed: u64,

    /// Balance each participant starts with.
    pub starting_balance: i64,

    /// Maximum participants at the table.
    pub max_participants: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_balance: DEFAULT_STARTING_BALANCE,
            max_participants: 8,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Create a new config with a custom participant limit.
    #[must_use]
    pub fn with_max_participants(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 participant");
        self.max_participants = max;
        self
    }
}
