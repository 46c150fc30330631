//! Hand-written strategies built around the zero-dice option.

use serde::{Deserialize, Serialize};

use crate::core::{GOAL_SCORE, MAX_ROLLS};
use crate::rules::{is_swap, zero_roll_score};

use super::Strategy;

/// Roll 0 when Free Bacon scores at least `margin`, else `num_rolls`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconStrategy {
    /// Minimum Free Bacon score worth taking.
    pub margin: u32,
    /// Dice to roll otherwise.
    pub num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self {
            margin: 8,
            num_rolls: 5,
        }
    }
}

impl BaconStrategy {
    /// Create with a custom margin and fallback dice count.
    #[must_use]
    pub fn new(margin: u32, num_rolls: u32) -> Self {
        assert!(num_rolls <= MAX_ROLLS, "Cannot roll more than 10 dice");
        Self { margin, num_rolls }
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if zero_roll_score(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Roll 0 when Free Bacon lands on a swap that leaves us ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStrategy {
    /// Dice to roll when no beneficial swap is available.
    pub num_rolls: u32,
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self { num_rolls: 5 }
    }
}

impl SwapStrategy {
    /// Create with a custom fallback dice count.
    #[must_use]
    pub fn new(num_rolls: u32) -> Self {
        assert!(num_rolls <= MAX_ROLLS, "Cannot roll more than 10 dice");
        Self { num_rolls }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let total = score + zero_roll_score(opponent_score);
        if is_swap(total, opponent_score) && opponent_score > total {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Compare the gain of rolling, Free Bacon and swapping, and take the best.
///
/// Rolling counts as a gain of 0, Free Bacon as its score minus `margin`,
/// and swapping as the gap between the opponent and our post-bacon total.
/// The swap gain is not gated on a swap actually happening, which makes
/// the strategy lean on Free Bacon whenever it trails. Free Bacon is also
/// taken whenever it alone reaches the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaStrategy {
    /// Free Bacon has to beat this to count as a gain.
    pub margin: u32,
    /// Dice to roll when rolling wins.
    pub num_rolls: u32,
    /// Goal of the game being played.
    pub goal: u32,
}

impl Default for DeltaStrategy {
    fn default() -> Self {
        Self {
            margin: 3,
            num_rolls: 4,
            goal: GOAL_SCORE,
        }
    }
}

impl DeltaStrategy {
    /// Create with a custom margin and dice count.
    #[must_use]
    pub fn new(margin: u32, num_rolls: u32) -> Self {
        assert!(num_rolls <= MAX_ROLLS, "Cannot roll more than 10 dice");
        Self {
            margin,
            num_rolls,
            ..Self::default()
        }
    }

    /// Play to a different goal.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }
}

impl Strategy for DeltaStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let zero = zero_roll_score(opponent_score);
        if self.goal.saturating_sub(score) <= zero {
            return 0;
        }

        let roll_delta = 0i64;
        let bacon_delta = i64::from(zero) - i64::from(self.margin);
        let swap_delta = i64::from(opponent_score) - i64::from(score + zero);
        let best = roll_delta.max(bacon_delta).max(swap_delta);

        if best == bacon_delta {
            0
        } else if best == roll_delta {
            self.num_rolls
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bacon_takes_big_bacon() {
        let strategy = BaconStrategy::default();
        // Opponent 87 -> 9
        assert_eq!(strategy.num_rolls(0, 87), 0);
        // Opponent 6 -> 7 -> prime -> 11
        assert_eq!(strategy.num_rolls(0, 6), 0);
        // Opponent 5 -> 6, below the margin
        assert_eq!(strategy.num_rolls(0, 5), 5);
        // Opponent 0 -> 1
        assert_eq!(strategy.num_rolls(50, 0), 5);
    }

    #[test]
    fn test_bacon_custom_margin() {
        let strategy = BaconStrategy::new(4, 6);
        // Opponent 2 -> 3 -> 5 >= 4
        assert_eq!(strategy.num_rolls(0, 2), 0);
        // Opponent 20 -> 3 -> 5
        assert_eq!(strategy.num_rolls(0, 20), 0);
        // Opponent 0 -> 1
        assert_eq!(strategy.num_rolls(0, 0), 6);
    }

    #[test]
    fn test_swap_takes_beneficial_swap() {
        let strategy = SwapStrategy::default();
        // Opponent 91 -> max(1, 9) + 1 = 10; 9 + 10 = 19 swaps with 91.
        assert_eq!(strategy.num_rolls(9, 91), 0);
    }

    #[test]
    fn test_swap_avoids_harmful_swap() {
        let strategy = SwapStrategy::default();
        // Opponent 19 -> max(9, 1) + 1 = 10; 81 + 10 = 91 vs 19 would hand over the lead.
        assert_eq!(strategy.num_rolls(81, 19), 5);
    }

    #[test]
    fn test_swap_without_swap() {
        assert_eq!(SwapStrategy::new(3).num_rolls(0, 0), 3);
    }

    #[test]
    fn test_delta_takes_winning_bacon() {
        // Opponent 87 -> 9 reaches 100 from 91.
        assert_eq!(DeltaStrategy::default().num_rolls(91, 87), 0);
    }

    #[test]
    fn test_delta_rolls_when_ahead_with_small_bacon() {
        // Opponent 10 -> 2 -> 3: bacon delta 0, roll delta 0; bacon wins ties.
        assert_eq!(DeltaStrategy::default().num_rolls(50, 10), 0);
        // Opponent 0 -> 1: bacon delta -2, swap delta -51, roll wins.
        assert_eq!(DeltaStrategy::default().num_rolls(50, 0), 4);
    }

    #[test]
    fn test_delta_trailing_prefers_bacon() {
        // Opponent 40 -> 5 -> 7: bacon delta 4, swap delta 40 - 17 = 23.
        assert_eq!(DeltaStrategy::default().num_rolls(10, 40), 0);
    }

    #[test]
    fn test_delta_custom_goal() {
        let strategy = DeltaStrategy::new(3, 4).with_goal(30);
        // Opponent 0 -> 1 reaches 30 from 29.
        assert_eq!(strategy.num_rolls(29, 0), 0);
        assert_eq!(strategy.num_rolls(20, 0), 4);
    }
}
