//! Strategies: how many dice to roll given both scores.
//!
//! A strategy is a pure function of `(score, opponent_score)` returning a
//! dice count in `0..=10`. Parameterized strategies are small structs whose
//! fields are the parameters, so they can be built, compared, printed and
//! serialized like any other value.
//!
//! ## Implementations
//!
//! - `AlwaysRoll`: a constant dice count
//! - `BaconStrategy`: take Free Bacon when it scores at least a margin
//! - `SwapStrategy`: take Free Bacon when it triggers a helpful swap
//! - `DeltaStrategy`: pick whichever of roll, bacon or swap gains most
//! - `MetaFinal`: cutoff strategy tuned separately for each dice kind
//! - Any `Fn(u32, u32) -> u32` closure
//!
//! ## Usage
//!
//! ```
//! use rust_hog::strategy::{always_roll, BaconStrategy, Strategy};
//!
//! assert_eq!(always_roll(5).num_rolls(0, 0), 5);
//! assert_eq!(always_roll(5).num_rolls(99, 99), 5);
//!
//! // Opponent at 87: Free Bacon scores 9, which beats the margin of 8.
//! assert_eq!(BaconStrategy::default().num_rolls(0, 87), 0);
//!
//! let cautious = |score: u32, _opponent: u32| -> u32 { if score > 90 { 1 } else { 4 } };
//! assert_eq!(cautious.num_rolls(95, 0), 1);
//! ```

mod heuristic;
mod meta;

pub use heuristic::{BaconStrategy, DeltaStrategy, SwapStrategy};
pub use meta::{final_strategy, MetaFinal};

use serde::{Deserialize, Serialize};

use crate::core::MAX_ROLLS;

/// Chooses a dice count for the player about to move.
pub trait Strategy {
    /// Dice to roll, in `0..=10`, given the mover's and opponent's scores.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F: Fn(u32, u32) -> u32> Strategy for F {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

/// Always roll the same number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysRoll(u32);

impl AlwaysRoll {
    /// Roll `n` dice every turn.
    #[must_use]
    pub fn new(n: u32) -> Self {
        assert!(n <= MAX_ROLLS, "Cannot roll more than 10 dice");
        Self(n)
    }

    /// The fixed dice count.
    #[must_use]
    pub fn count(self) -> u32 {
        self.0
    }
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// A strategy that always rolls `n` dice.
#[must_use]
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll::new(n)
}
