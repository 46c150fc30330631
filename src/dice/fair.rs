//! Fair N-sided dice.

use crate::core::{GameRng, GameRngState};

use super::{Dice, DiceKind};

/// A fair die with a fixed number of sides, backed by a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct FairDice {
    sides: u32,
    rng: GameRng,
}

impl FairDice {
    /// Create a die with `sides` faces.
    #[must_use]
    pub fn new(sides: u32, rng: GameRng) -> Self {
        assert!(sides > 0, "A die needs at least one side");
        Self { sides, rng }
    }

    /// A fair four-sided die.
    #[must_use]
    pub fn four_sided(rng: GameRng) -> Self {
        Self::new(DiceKind::FourSided.sides(), rng)
    }

    /// A fair six-sided die.
    #[must_use]
    pub fn six_sided(rng: GameRng) -> Self {
        Self::new(DiceKind::SixSided.sides(), rng)
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Snapshot the underlying RNG, e.g. to replay a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> u32 {
        self.rng.roll(self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_in_range() {
        let mut d4 = FairDice::four_sided(GameRng::new(5));
        let mut d6 = FairDice::six_sided(GameRng::new(5));
        assert_eq!(d4.sides(), 4);
        assert_eq!(d6.sides(), 6);

        for _ in 0..500 {
            assert!((1..=4).contains(&d4.roll()));
            assert!((1..=6).contains(&d6.roll()));
        }
    }

    #[test]
    fn test_mean_is_close_to_fair() {
        let mut d6 = FairDice::six_sided(GameRng::new(11));
        let total: u32 = (0..60_000).map(|_| d6.roll()).sum();
        let mean = total as f64 / 60_000.0;
        assert!((mean - 3.5).abs() < 0.05, "mean was {}", mean);
    }

    #[test]
    fn test_replay_from_state() {
        let mut die = FairDice::six_sided(GameRng::new(3));
        die.roll();
        let state = die.rng_state();

        let expected: Vec<_> = (0..10).map(|_| die.roll()).collect();
        let mut replay = FairDice::six_sided(GameRng::from_state(&state));
        let actual: Vec<_> = (0..10).map(|_| replay.roll()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    #[should_panic(expected = "A die needs at least one side")]
    fn test_zero_sides() {
        let _ = FairDice::new(0, GameRng::new(1));
    }
}
