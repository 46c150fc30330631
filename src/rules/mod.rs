//! The rules of Hog.
//!
//! - `turn`: resolving a single turn (Pig Out, Free Bacon, Hogtimus Prime)
//! - `game`: the game loop (Hog Wild, Swine Swap, termination)
//!
//! Rule violations such as rolling 11 dice are programming errors and
//! panic with a descriptive message.

pub mod game;
pub mod turn;

pub use game::{is_swap, play, play_traced, play_with_config, select_dice, GameRecord, TurnRecord};
pub use turn::{
    apply_turn, collect_rolls, free_bacon, hogtimus_prime, roll_dice, score_rolls, take_turn,
    take_turn_to_goal, zero_roll_score, Rolls, TurnOutcome,
};
