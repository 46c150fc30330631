//! Strategy behavior across the whole score space.

use rust_hog::core::{GOAL_SCORE, MAX_ROLLS};
use rust_hog::rules::{is_swap, zero_roll_score};
use rust_hog::strategy::{
    always_roll, final_strategy, BaconStrategy, DeltaStrategy, MetaFinal, Strategy, SwapStrategy,
};

fn all_scores() -> impl Iterator<Item = (u32, u32)> {
    (0..GOAL_SCORE).flat_map(|score| (0..GOAL_SCORE).map(move |opponent| (score, opponent)))
}

// =============================================================================
// Legal Output
// =============================================================================

#[test]
fn test_every_strategy_returns_legal_counts() {
    let strategies: Vec<(&str, Box<dyn Strategy>)> = vec![
        ("always_roll", Box::new(always_roll(10))),
        ("bacon", Box::new(BaconStrategy::default())),
        ("swap", Box::new(SwapStrategy::default())),
        ("delta", Box::new(DeltaStrategy::default())),
        ("final", Box::new(final_strategy())),
    ];

    for (name, strategy) in &strategies {
        for (score, opponent) in all_scores() {
            let rolls = strategy.num_rolls(score, opponent);
            assert!(rolls <= MAX_ROLLS, "{} rolled {} at {}-{}", name, rolls, score, opponent);
        }
    }
}

#[test]
fn test_meta_final_only_returns_zero_or_a_count() {
    let strategy = MetaFinal::new(3, 2, 5, 6);
    for (score, opponent) in all_scores() {
        let rolls = strategy.num_rolls(score, opponent);
        assert!(matches!(rolls, 0 | 2 | 6), "unexpected {} at {}-{}", rolls, score, opponent);
    }
}

// =============================================================================
// Decision Rules
// =============================================================================

#[test]
fn test_bacon_matches_its_rule() {
    let strategy = BaconStrategy::new(7, 3);
    for (score, opponent) in all_scores() {
        let expected = if zero_roll_score(opponent) >= 7 { 0 } else { 3 };
        assert_eq!(strategy.num_rolls(score, opponent), expected);
    }
}

#[test]
fn test_swap_only_rolls_zero_for_a_gain() {
    let strategy = SwapStrategy::default();
    for (score, opponent) in all_scores() {
        if strategy.num_rolls(score, opponent) == 0 {
            let total = score + zero_roll_score(opponent);
            assert!(is_swap(total, opponent));
            assert!(opponent > total);
        }
    }
}

#[test]
fn test_final_strategy_takes_winning_bacon() {
    let strategy = final_strategy();
    for (score, opponent) in all_scores() {
        if score + zero_roll_score(opponent) >= GOAL_SCORE {
            assert_eq!(strategy.num_rolls(score, opponent), 0, "at {}-{}", score, opponent);
        }
    }
}

#[test]
fn test_final_strategy_values_bacon_plus_swap_swing() {
    let strategy = final_strategy();
    for (score, opponent) in all_scores() {
        let base = zero_roll_score(opponent);
        if GOAL_SCORE - score <= base {
            continue;
        }
        let total = score + base;
        let mut effective = i64::from(base);
        if is_swap(total, opponent) {
            effective += i64::from(opponent) - i64::from(total);
        }
        let expected = if (score + opponent) % 7 == 0 {
            if effective > 2 { 0 } else { 3 }
        } else if effective > 4 {
            0
        } else {
            4
        };
        assert_eq!(strategy.num_rolls(score, opponent), expected, "at {}-{}", score, opponent);
    }
}

#[test]
fn test_strategies_serialize() {
    let strategy = final_strategy();
    let json = serde_json::to_string(&strategy).unwrap();
    let restored: MetaFinal = serde_json::from_str(&json).unwrap();
    assert_eq!(strategy, restored);

    let bacon = BaconStrategy::new(9, 2);
    let json = serde_json::to_string(&bacon).unwrap();
    assert_eq!(serde_json::from_str::<BaconStrategy>(&json).unwrap(), bacon);
}
