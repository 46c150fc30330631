//! Dice sources.
//!
//! A die is anything that can be rolled with no arguments and returns a
//! positive outcome. The game loop needs two kinds, four-sided and
//! six-sided, and asks a `DiceBag` for whichever Hog Wild selects.
//!
//! ## Implementations
//!
//! - `FairDice`: seeded N-sided die backed by `GameRng`
//! - `TestDice`: repeats a fixed script of outcomes, for tests
//! - Any `FnMut() -> u32` closure
//!
//! ## Usage
//!
//! ```
//! use rust_hog::dice::{Dice, DiceBag, DiceKind, DiceSet, TestDice};
//!
//! let mut dice = TestDice::new(&[3, 1, 5, 6]);
//! assert_eq!(dice.roll(), 3);
//! assert_eq!(dice.roll(), 1);
//!
//! let mut bag = DiceSet::fair(42);
//! let roll = bag.select(DiceKind::FourSided).roll();
//! assert!((1..=4).contains(&roll));
//! ```

mod fair;
mod test_dice;

pub use fair::FairDice;
pub use test_dice::TestDice;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A die: a source of positive integer outcomes.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> u32;
}

impl<F: FnMut() -> u32> Dice for F {
    fn roll(&mut self) -> u32 {
        self()
    }
}

/// The two kinds of dice used in Hog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Used under Hog Wild.
    FourSided,
    /// The normal die.
    SixSided,
}

impl DiceKind {
    /// Number of faces.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Hands out the die for a given kind.
///
/// The game loop uses this so the dice are an explicit parameter rather
/// than ambient state.
pub trait DiceBag {
    /// The die to roll for `kind`.
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice;
}

/// A four-sided and a six-sided die.
#[derive(Clone, Debug)]
pub struct DiceSet<F, S> {
    /// Die used under Hog Wild.
    pub four_sided: F,
    /// Die used otherwise.
    pub six_sided: S,
}

impl<F: Dice, S: Dice> DiceSet<F, S> {
    /// Pair two dice.
    pub fn new(four_sided: F, six_sided: S) -> Self {
        Self {
            four_sided,
            six_sided,
        }
    }
}

impl DiceSet<FairDice, FairDice> {
    /// Fair dice seeded from a single seed.
    ///
    /// Each die gets its own fork, so the two streams are independent.
    #[must_use]
    pub fn fair(seed: u64) -> Self {
        Self::from_rng(&mut GameRng::new(seed))
    }

    /// Fair dice forked from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: &mut GameRng) -> Self {
        Self::new(
            FairDice::four_sided(rng.fork()),
            FairDice::six_sided(rng.fork()),
        )
    }
}

impl<F: Dice, S: Dice> DiceBag for DiceSet<F, S> {
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match kind {
            DiceKind::FourSided => &mut self.four_sided,
            DiceKind::SixSided => &mut self.six_sided,
        }
    }
}

impl<B: DiceBag + ?Sized> DiceBag for &mut B {
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice {
        (**self).select(kind)
    }
}
