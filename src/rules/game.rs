//! The game loop.
//!
//! Players alternate turns until either score reaches the goal. Before each
//! turn Hog Wild picks the dice; after each turn Swine Swap may exchange
//! the two scores.
//!
//! Every turn raises the score sum by at least 1 (Free Bacon scores at least
//! 1, and a turn scoring 0 gives the opponent `num_rolls >= 1`), while a swap
//! leaves the sum unchanged. So the loop always ends; no turn cap is needed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{is_reversed_pair, GameConfig, PlayerId, HOG_WILD_MODULUS};
use crate::dice::{DiceBag, DiceKind};
use crate::strategy::Strategy;

use super::turn::{apply_turn, Rolls};

/// Hog Wild: four-sided dice when the score sum is a multiple of 7.
#[must_use]
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % HOG_WILD_MODULUS == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// Swine Swap: are the last two digits of the scores reverses of each other?
#[must_use]
pub fn is_swap(score0: u32, score1: u32) -> bool {
    is_reversed_pair(score0, score1)
}

/// One turn of a recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved.
    pub player: PlayerId,
    /// Dice chosen by Hog Wild.
    pub dice: DiceKind,
    /// Dice count the strategy chose.
    pub num_rolls: u32,
    /// Raw outcomes, empty for Free Bacon.
    pub rolls: Rolls,
    /// Points the turn scored.
    pub turn_score: u32,
    /// Did Swine Swap fire after this turn?
    pub swapped: bool,
    /// Scores after the turn (and swap), player 0 first.
    pub scores: (u32, u32),
}

/// A finished game with its full turn history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Turns in play order.
    pub turns: Vec<TurnRecord>,
    /// Final scores, player 0 first.
    pub final_scores: (u32, u32),
}

impl GameRecord {
    /// Number of turns played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Was the game over before any turn was played?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Player with the higher final score; ties go to player 1.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        let (score0, score1) = self.final_scores;
        if score0 > score1 {
            PlayerId::ZERO
        } else {
            PlayerId::ONE
        }
    }

    /// How many times the scores were swapped.
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.turns.iter().filter(|t| t.swapped).count()
    }
}

/// Play a game from 0-0 to 100 and return the final scores.
///
/// ```
/// use rust_hog::dice::DiceSet;
/// use rust_hog::rules::play;
/// use rust_hog::strategy::always_roll;
///
/// let mut dice = DiceSet::fair(42);
/// let (score0, score1) = play(&always_roll(5), &always_roll(5), &mut dice);
/// assert!(score0 >= 100 || score1 >= 100);
/// ```
pub fn play<S0, S1, B>(strategy0: &S0, strategy1: &S1, dice: &mut B) -> (u32, u32)
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    play_with_config(strategy0, strategy1, &GameConfig::default(), dice)
}

/// Play a game with a custom goal or starting scores.
///
/// The goal is checked before every turn, so a game that starts with
/// either score at or past the goal plays no turns and returns the
/// starting scores.
pub fn play_with_config<S0, S1, B>(
    strategy0: &S0,
    strategy1: &S1,
    config: &GameConfig,
    dice: &mut B,
) -> (u32, u32)
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    run(strategy0, strategy1, config, dice, |_| {})
}

/// Play a game and keep a record of every turn.
pub fn play_traced<S0, S1, B>(
    strategy0: &S0,
    strategy1: &S1,
    config: &GameConfig,
    dice: &mut B,
) -> GameRecord
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    let mut turns = Vec::new();
    let final_scores = run(strategy0, strategy1, config, dice, |turn| turns.push(turn));
    GameRecord {
        turns,
        final_scores,
    }
}

fn run<S0, S1, B>(
    strategy0: &S0,
    strategy1: &S1,
    config: &GameConfig,
    dice: &mut B,
    mut on_turn: impl FnMut(TurnRecord),
) -> (u32, u32)
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    let goal = config.goal;
    let (mut score0, mut score1) = (config.score0, config.score1);
    let mut who = PlayerId::ZERO;

    while score0 < goal && score1 < goal {
        let kind = select_dice(score0, score1);
        let die = dice.select(kind);

        let outcome = if who == PlayerId::ZERO {
            let outcome = apply_turn(strategy0, score0, score1, goal, die);
            score0 = outcome.score;
            score1 = outcome.opponent_score;
            outcome
        } else {
            let outcome = apply_turn(strategy1, score1, score0, goal, die);
            score1 = outcome.score;
            score0 = outcome.opponent_score;
            outcome
        };

        let swapped = is_swap(score0, score1);
        if swapped {
            std::mem::swap(&mut score0, &mut score1);
        }

        trace!(
            player = who.index(),
            %kind,
            num_rolls = outcome.num_rolls,
            turn_score = outcome.turn_score,
            swapped,
            score0,
            score1,
            "turn"
        );

        on_turn(TurnRecord {
            player: who,
            dice: kind,
            num_rolls: outcome.num_rolls,
            rolls: outcome.rolls,
            turn_score: outcome.turn_score,
            swapped,
            scores: (score0, score1),
        });

        who = who.other();
    }

    debug!(score0, score1, "game over");
    (score0, score1)
}
