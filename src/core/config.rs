//! Game configuration.
//!
//! A game is fully described by its goal and the two starting scores.
//! The rule constants live here too so every module agrees on them.

use serde::{Deserialize, Serialize};

/// The score a player must reach to win.
pub const GOAL_SCORE: u32 = 100;

/// The most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Hog Wild: four-sided dice are used when the score sum is a multiple of this.
pub const HOG_WILD_MODULUS: u32 = 7;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score at which the game ends (default: 100).
    pub goal: u32,

    /// Starting score for player 0.
    pub score0: u32,

    /// Starting score for player 1.
    pub score1: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            score0: 0,
            score1: 0,
        }
    }
}

impl GameConfig {
    /// Create a config with the default goal and scores of 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        assert!(goal > 0, "Goal must be positive");
        self.goal = goal;
        self
    }

    /// Set both starting scores.
    #[must_use]
    pub fn with_starting_scores(mut self, score0: u32, score1: u32) -> Self {
        self.score0 = score0;
        self.score1 = score1;
        self
    }

    /// Has either starting score already reached the goal?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.score0 >= self.goal || self.score1 >= self.goal
    }
}
