//! Head-to-head win rates.

use tracing::debug;

use crate::core::PlayerId;
use crate::dice::DiceBag;
use crate::rules::play;
use crate::strategy::Strategy;

use super::averaging::make_averaged;

/// Play one game and report who won. Player 0 needs a strictly higher score.
pub fn winner<S0, S1, B>(strategy0: &S0, strategy1: &S1, dice: &mut B) -> PlayerId
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    let (score0, score1) = play(strategy0, strategy1, dice);
    if score0 > score1 {
        PlayerId::ZERO
    } else {
        PlayerId::ONE
    }
}

/// Win rate of `strategy` against `baseline`, averaged over both seats.
///
/// Plays `num_samples` games with `strategy` moving first and another
/// `num_samples` with it moving second.
pub fn average_win_rate<S, T, B>(
    strategy: &S,
    baseline: &T,
    dice: &mut B,
    num_samples: usize,
) -> f64
where
    S: Strategy + ?Sized,
    T: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    let as_player0 =
        1.0 - make_averaged(|| winner(strategy, baseline, dice).index() as u32, num_samples)();
    let as_player1 =
        make_averaged(|| winner(baseline, strategy, dice).index() as u32, num_samples)();

    debug!(as_player0, as_player1, "seat win rates");
    (as_player0 + as_player1) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DiceSet, TestDice};
    use crate::strategy::always_roll;

    #[test]
    fn test_winner_scripted() {
        // Ten sixes score 60 a turn; Free Bacon cannot keep up.
        let mut dice = TestDice::new(&[6]);
        assert_eq!(winner(&always_roll(10), &always_roll(0), &mut dice), PlayerId::ZERO);
        assert_eq!(winner(&always_roll(0), &always_roll(10), &mut dice), PlayerId::ONE);
    }

    #[test]
    fn test_scripted_win_rate_is_exact() {
        let mut dice = TestDice::new(&[6]);
        assert_eq!(average_win_rate(&always_roll(10), &always_roll(0), &mut dice, 4), 1.0);
        assert_eq!(average_win_rate(&always_roll(0), &always_roll(10), &mut dice, 4), 0.0);
    }

    #[test]
    fn test_self_play_is_even() {
        let mut dice = DiceSet::fair(42);
        let rate = average_win_rate(&always_roll(5), &always_roll(5), &mut dice, 2000);
        assert!((rate - 0.5).abs() < 0.05, "win rate was {}", rate);
    }
}
