//! Scripted dice for deterministic tests.

use super::{Dice, DiceBag, DiceKind};

/// A die that cycles through a fixed list of outcomes.
///
/// `TestDice::new(&[4, 1, 2])` rolls 4, 1, 2, 4, 1, 2, ...
///
/// As a `DiceBag` it ignores the requested kind and keeps following its
/// script, so a whole game can be pinned down with a single sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDice {
    outcomes: Vec<u32>,
    index: usize,
}

impl TestDice {
    /// Create scripted dice. The script must be non-empty.
    #[must_use]
    pub fn new(outcomes: &[u32]) -> Self {
        assert!(!outcomes.is_empty(), "Test dice need at least one outcome");
        Self {
            outcomes: outcomes.to_vec(),
            index: 0,
        }
    }

    /// How many times the dice have been rolled since the script last wrapped.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.outcomes[self.index];
        self.index = (self.index + 1) % self.outcomes.len();
        outcome
    }
}

impl DiceBag for TestDice {
    fn select(&mut self, _kind: DiceKind) -> &mut dyn Dice {
        self
    }
}
