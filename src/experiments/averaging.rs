//! Sample averaging and the best-roll-count search.

use tracing::debug;

use crate::core::MAX_ROLLS;
use crate::dice::Dice;
use crate::rules::roll_dice;

/// Wrap `f` so that each call runs it `num_samples` times and returns the mean.
///
/// Arguments are captured by the closure, so every sample sees the same
/// inputs while any captured dice keep advancing.
///
/// ```
/// use rust_hog::dice::{Dice, TestDice};
/// use rust_hog::experiments::make_averaged;
///
/// let mut dice = TestDice::new(&[3, 1, 5, 6]);
/// let mut averaged = make_averaged(|| dice.roll(), 1000);
/// assert_eq!(averaged(), 3.75);
/// ```
pub fn make_averaged<F, T>(mut f: F, num_samples: usize) -> impl FnMut() -> f64
where
    F: FnMut() -> T,
    T: Into<f64>,
{
    assert!(num_samples > 0, "Need at least one sample");
    move || {
        let total: f64 = (0..num_samples).map(|_| Into::<f64>::into(f())).sum();
        total / num_samples as f64
    }
}

/// The dice count in `1..=10` with the highest average `roll_dice` score.
///
/// Ties keep the smaller count.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(dice: &mut D, num_samples: usize) -> u32 {
    let mut best_rolls = 1;
    let mut best_average = 0.0;

    for num_rolls in 1..=MAX_ROLLS {
        let average = make_averaged(|| roll_dice(num_rolls, dice), num_samples)();
        debug!(num_rolls, average, "average turn score");
        if average > best_average {
            best_rolls = num_rolls;
            best_average = average;
        }
    }

    best_rolls
}
