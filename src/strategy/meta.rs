//! A cutoff strategy with separate parameters per dice kind.
//!
//! `MetaFinal` scores the zero-dice option as an "effective" value and
//! takes it when that value beats a cutoff. The cutoff and the fallback
//! dice count depend on whether Hog Wild has handed us four-sided dice.
//! The four parameters are tuned by the grid search in `experiments`.
//!
//! The effective value is the Free Bacon score plus the swing of any swap
//! it triggers. Leaving the opponent on Hog Wild dice earns no bonus; the
//! tuned `final_strategy` parameters assume exactly this valuation.

use serde::{Deserialize, Serialize};

use crate::core::{GOAL_SCORE, MAX_ROLLS};
use crate::dice::DiceKind;
use crate::rules::{is_swap, select_dice, zero_roll_score};

use super::Strategy;

/// Cutoff strategy parameterized by dice kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaFinal {
    /// Take Free Bacon on four-sided turns when its effective value exceeds this.
    pub four_cutoff: u32,
    /// Dice to roll on four-sided turns otherwise.
    pub four_count: u32,
    /// Take Free Bacon on six-sided turns when its effective value exceeds this.
    pub six_cutoff: u32,
    /// Dice to roll on six-sided turns otherwise.
    pub six_count: u32,
    /// Goal of the game being played.
    pub goal: u32,
}

impl MetaFinal {
    /// Create a strategy for the standard goal.
    #[must_use]
    pub fn new(four_cutoff: u32, four_count: u32, six_cutoff: u32, six_count: u32) -> Self {
        assert!(four_count <= MAX_ROLLS, "Cannot roll more than 10 dice");
        assert!(six_count <= MAX_ROLLS, "Cannot roll more than 10 dice");
        Self {
            four_cutoff,
            four_count,
            six_cutoff,
            six_count,
            goal: GOAL_SCORE,
        }
    }

    /// Play to a different goal.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Value of rolling zero dice, counting its side effects.
    ///
    /// Starts from the Free Bacon score and adds the swing of a swap, which
    /// is negative when the swap would hand over the lead.
    #[must_use]
    pub fn effective_zero_score(&self, score: u32, opponent_score: u32) -> i64 {
        let base = zero_roll_score(opponent_score);
        let total = score + base;
        let mut effective = i64::from(base);

        if is_swap(total, opponent_score) {
            effective += i64::from(opponent_score) - i64::from(total);
        }
        effective
    }
}

impl Strategy for MetaFinal {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let base = zero_roll_score(opponent_score);
        if self.goal.saturating_sub(score) <= base {
            return 0;
        }

        let effective = self.effective_zero_score(score, opponent_score);
        let (cutoff, count) = match select_dice(score, opponent_score) {
            DiceKind::FourSided => (self.four_cutoff, self.four_count),
            DiceKind::SixSided => (self.six_cutoff, self.six_count),
        };

        if effective > i64::from(cutoff) {
            0
        } else {
            count
        }
    }
}

impl std::fmt::Display for MetaFinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.four_cutoff, self.four_count, self.six_cutoff, self.six_count
        )
    }
}

/// The tuned final strategy.
#[must_use]
pub fn final_strategy() -> MetaFinal {
    MetaFinal::new(2, 3, 4, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_uses_four_sided_count() {
        // 0 + 0 is a multiple of 7 -> four-sided; bacon 1 <= 2.
        assert_eq!(final_strategy().num_rolls(0, 0), 3);
    }

    #[test]
    fn test_six_sided_count() {
        assert_eq!(final_strategy().num_rolls(1, 0), 4);
        assert_eq!(final_strategy().num_rolls(5, 0), 4);
    }

    #[test]
    fn test_big_bacon() {
        // Opponent 87 -> 9 > 4.
        assert_eq!(final_strategy().num_rolls(10, 87), 0);
    }

    #[test]
    fn test_no_bonus_for_leaving_opponent_on_four_sided() {
        // 6 + 1 + 0 = 7 would put the opponent on four-sided dice; bacon stays 1.
        assert_eq!(final_strategy().effective_zero_score(6, 0), 1);
        assert_eq!(final_strategy().num_rolls(6, 0), 4);
    }

    #[test]
    fn test_beneficial_swap() {
        // 9 + 10 = 19 swaps with 91.
        assert_eq!(final_strategy().effective_zero_score(9, 91), 10 + 72);
        assert_eq!(final_strategy().num_rolls(9, 91), 0);
    }

    #[test]
    fn test_harmful_swap() {
        // 81 + 10 = 91 would swap with 19 and lose 72 points.
        assert_eq!(final_strategy().effective_zero_score(81, 19), 10 - 72);
        assert_eq!(final_strategy().num_rolls(81, 19), 4);
    }

    #[test]
    fn test_bacon_to_win() {
        // Opponent 40 -> 5 -> 7 reaches 100 from 95.
        assert_eq!(final_strategy().num_rolls(95, 40), 0);
    }

    #[test]
    fn test_custom_goal() {
        let strategy = MetaFinal::new(2, 3, 4, 4).with_goal(10);
        // Opponent 0 -> 1 reaches 10 from 9.
        assert_eq!(strategy.num_rolls(9, 0), 0);
    }

    #[test]
    fn test_display_lists_parameters() {
        assert_eq!(format!("{}", final_strategy()), "2, 3, 4, 4");
    }

    #[test]
    #[should_panic(expected = "Cannot roll more than 10 dice")]
    fn test_rejects_too_many_dice() {
        let _ = MetaFinal::new(2, 11, 4, 4);
    }
}
