//! Core building blocks: digits, primes, players, RNG, configuration.
//!
//! Everything here is free of game flow. The turn engine and game loop in
//! `rules` are built on top of these helpers.

pub mod config;
pub mod digits;
pub mod player;
pub mod primes;
pub mod rng;

pub use config::{GameConfig, GOAL_SCORE, HOG_WILD_MODULUS, MAX_ROLLS};
pub use digits::{digit, digits_at, is_reversed_pair, ones, tens};
pub use player::PlayerId;
pub use primes::{is_prime, next_prime};
pub use rng::{GameRng, GameRngState};
