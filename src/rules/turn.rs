//! Turn resolution.
//!
//! A turn is either a roll of 1-10 dice or a zero-dice Free Bacon turn.
//! Either way the Hogtimus Prime rule is applied to the result:
//!
//! - **Pig Out**: any die showing 1 makes the whole roll score 0
//! - **Free Bacon**: rolling zero dice scores one more than the larger
//!   digit of the opponent's score
//! - **Hogtimus Prime**: a prime turn score is bumped to the next prime

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{is_prime, next_prime, ones, tens, GOAL_SCORE, MAX_ROLLS};
use crate::dice::Dice;
use crate::strategy::Strategy;

/// Outcomes of a single roll, at most `MAX_ROLLS` long.
pub type Rolls = SmallVec<[u32; 10]>;

/// Roll `num_rolls` dice and sum them, or score 0 on a Pig Out.
///
/// The dice are always rolled exactly `num_rolls` times, even after a 1
/// comes up. No Free Bacon or Hogtimus Prime here.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> u32 {
    score_rolls(&collect_rolls(num_rolls, dice))
}

/// Roll `num_rolls` dice and keep every outcome.
pub fn collect_rolls<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Rolls {
    assert!(num_rolls > 0, "Must roll at least once");
    (0..num_rolls).map(|_| dice.roll()).collect()
}

/// Score a set of outcomes under the Pig Out rule.
#[must_use]
pub fn score_rolls(rolls: &[u32]) -> u32 {
    if rolls.contains(&1) {
        0
    } else {
        rolls.iter().sum()
    }
}

/// Free Bacon: one more than the larger of the opponent's last two digits.
#[must_use]
pub fn free_bacon(opponent_score: u32) -> u32 {
    ones(opponent_score).max(tens(opponent_score)) + 1
}

/// Hogtimus Prime: a prime score becomes the next prime.
#[must_use]
pub fn hogtimus_prime(score: u32) -> u32 {
    if is_prime(score) {
        next_prime(score)
    } else {
        score
    }
}

/// What rolling zero dice would score against `opponent_score`.
#[must_use]
pub fn zero_roll_score(opponent_score: u32) -> u32 {
    hogtimus_prime(free_bacon(opponent_score))
}

/// Resolve one turn and return its score.
///
/// Rolling zero dice takes Free Bacon and never touches `dice`.
///
/// ```
/// use rust_hog::dice::TestDice;
/// use rust_hog::rules::take_turn;
///
/// // 4 + 3 = 7 is prime, so it becomes 11.
/// let mut dice = TestDice::new(&[4, 3]);
/// assert_eq!(take_turn(2, 0, &mut dice), 11);
///
/// // Opponent at 47: max(7, 4) + 1 = 8.
/// assert_eq!(take_turn(0, 47, &mut dice), 8);
/// ```
pub fn take_turn<D: Dice + ?Sized>(num_rolls: u32, opponent_score: u32, dice: &mut D) -> u32 {
    take_turn_to_goal(num_rolls, opponent_score, GOAL_SCORE, dice)
}

/// `take_turn` for a game played to a custom goal.
pub fn take_turn_to_goal<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    goal: u32,
    dice: &mut D,
) -> u32 {
    resolve(num_rolls, opponent_score, goal, dice).0
}

/// Resolve a turn, returning the score and the raw outcomes rolled.
pub(crate) fn resolve<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    goal: u32,
    dice: &mut D,
) -> (u32, Rolls) {
    assert!(num_rolls <= MAX_ROLLS, "Cannot roll more than 10 dice");
    assert!(opponent_score < goal, "The game should be over");

    let (raw, rolls) = if num_rolls == 0 {
        (free_bacon(opponent_score), Rolls::new())
    } else {
        let rolls = collect_rolls(num_rolls, dice);
        (score_rolls(&rolls), rolls)
    };

    let score = hogtimus_prime(raw);
    trace!(num_rolls, ?rolls, raw, score, "turn resolved");
    (score, rolls)
}

/// The effect of one player's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The mover's score after the turn.
    pub score: u32,
    /// The opponent's score after the turn.
    pub opponent_score: u32,
    /// Dice count the strategy chose.
    pub num_rolls: u32,
    /// Points the turn itself scored.
    pub turn_score: u32,
    /// Raw outcomes, empty for Free Bacon.
    pub rolls: Rolls,
}

/// Play one turn for the mover: ask the strategy, resolve, score.
///
/// A turn that scores exactly 0 hands the opponent `num_rolls` points.
pub fn apply_turn<S, D>(
    strategy: &S,
    score: u32,
    opponent_score: u32,
    goal: u32,
    dice: &mut D,
) -> TurnOutcome
where
    S: Strategy + ?Sized,
    D: Dice + ?Sized,
{
    let num_rolls = strategy.num_rolls(score, opponent_score);
    let (turn_score, rolls) = resolve(num_rolls, opponent_score, goal, dice);

    let opponent_score = if turn_score == 0 {
        opponent_score + num_rolls
    } else {
        opponent_score
    };

    TurnOutcome {
        score: score + turn_score,
        opponent_score,
        num_rolls,
        turn_score,
        rolls,
    }
}
