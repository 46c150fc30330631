//! # rust-hog
//!
//! A simulator for the two-player dice game Hog, with strategies and
//! Monte Carlo experiments to compare them.
//!
//! ## Rules
//!
//! Players take turns rolling up to ten dice; the first to 100 wins.
//!
//! - **Pig Out**: any die showing 1 makes the turn score 0
//! - **Free Bacon**: rolling zero dice scores one more than the larger
//!   digit of the opponent's score
//! - **Hogtimus Prime**: a prime turn score is bumped to the next prime
//! - **Hog Wild**: four-sided dice are used when the score sum is a
//!   multiple of 7
//! - **Swine Swap**: when the last two digits of the scores are reverses
//!   of each other (19 and 91), the scores are exchanged
//!
//! A turn scoring 0 also hands the opponent one point per die rolled.
//!
//! ## Design Principles
//!
//! 1. **Explicit Randomness**: Dice are always passed in. Fair dice are
//!    seeded, and scripted `TestDice` pin down a game exactly.
//!
//! 2. **Strategies Are Values**: A strategy is a `Strategy` impl, either a
//!    closure or a small parameter struct such as `MetaFinal`.
//!
//! 3. **Panics for Rule Violations**: Rolling 11 dice or playing past the
//!    goal is a bug in the caller and panics. Only experiment
//!    configuration returns `Result`.
//!
//! ## Modules
//!
//! - `core`: Digits, primes, players, RNG, configuration
//! - `dice`: Dice trait, fair and scripted dice, Hog Wild dice selection
//! - `rules`: Turn resolution and the game loop
//! - `strategy`: Strategy trait and the built-in strategies
//! - `experiments`: Averaging, win rates, parameter search

pub mod core;
pub mod dice;
pub mod experiments;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, GOAL_SCORE, MAX_ROLLS};

pub use crate::dice::{Dice, DiceBag, DiceKind, DiceSet, FairDice, TestDice};

pub use crate::rules::{
    apply_turn, is_swap, play, play_traced, play_with_config, roll_dice, select_dice, take_turn,
    GameRecord, TurnOutcome, TurnRecord,
};

pub use crate::strategy::{
    always_roll, final_strategy, AlwaysRoll, BaconStrategy, DeltaStrategy, MetaFinal, Strategy,
    SwapStrategy,
};

pub use crate::experiments::{
    average_win_rate, grid_search, make_averaged, max_scoring_num_rolls, run_experiments, winner,
    ExperimentConfig, ExperimentError, ExperimentReport, MetaFinalGrid,
};
