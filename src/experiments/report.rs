//! The full experiment run and its report.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::GameRng;
use crate::dice::{DiceSet, FairDice};
use crate::strategy::{
    always_roll, final_strategy, BaconStrategy, DeltaStrategy, Strategy, SwapStrategy,
};

use super::averaging::max_scoring_num_rolls;
use super::config::{ExperimentConfig, ExperimentError};
use super::grid::{best_result, grid_search, GridResult};
use super::win_rate::average_win_rate;

/// Win rate of a named strategy against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyWinRate {
    /// Display name, e.g. `bacon_strategy`.
    pub name: String,
    /// Average win rate over both seats.
    pub win_rate: f64,
}

/// Everything a run measured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Seed the run used.
    pub seed: u64,
    /// Best roll count with six-sided dice.
    pub six_sided_max: u32,
    /// Best roll count with four-sided dice.
    pub four_sided_max: u32,
    /// Win rates of the built-in strategies, in a fixed order.
    pub win_rates: Vec<StrategyWinRate>,
    /// Grid points, empty unless the search was enabled.
    pub grid: Vec<GridResult>,
}

impl ExperimentReport {
    /// Look up a strategy's win rate by name.
    #[must_use]
    pub fn win_rate(&self, name: &str) -> Option<f64> {
        self.win_rates.iter().find(|w| w.name == name).map(|w| w.win_rate)
    }

    /// The best grid point, if the search ran.
    #[must_use]
    pub fn best_grid_result(&self) -> Option<&GridResult> {
        best_result(&self.grid)
    }
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Max scoring num rolls for six-sided dice: {}", self.six_sided_max)?;
        writeln!(f, "Max scoring num rolls for four-sided dice: {}", self.four_sided_max)?;
        for entry in &self.win_rates {
            writeln!(f, "{} win rate: {}", entry.name, entry.win_rate)?;
        }
        for point in &self.grid {
            writeln!(f, "{}  win rate: {}", point.strategy, point.win_rate)?;
        }
        if let Some(best) = self.best_grid_result() {
            writeln!(f, "best parameters: {} ({})", best.strategy, best.win_rate)?;
        }
        Ok(())
    }
}

/// Run every experiment described by `config`.
///
/// Each experiment draws from its own fork of the seeded RNG, so enabling
/// the grid search does not change the other numbers.
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;
    let mut rng = GameRng::new(config.seed);

    let six_sided_max =
        max_scoring_num_rolls(&mut FairDice::six_sided(rng.fork()), config.roll_samples);
    info!(six_sided_max, "max scoring num rolls for six-sided dice");
    let four_sided_max =
        max_scoring_num_rolls(&mut FairDice::four_sided(rng.fork()), config.roll_samples);
    info!(four_sided_max, "max scoring num rolls for four-sided dice");

    let baseline = always_roll(config.baseline_rolls);
    let always_eight = always_roll(8);
    let bacon = BaconStrategy::default();
    let swap = SwapStrategy::default();
    let delta = DeltaStrategy::default();
    let tuned = final_strategy();

    let contenders: [(&str, &dyn Strategy); 5] = [
        ("always_roll(8)", &always_eight),
        ("bacon_strategy", &bacon),
        ("swap_strategy", &swap),
        ("delta_strategy", &delta),
        ("final_strategy", &tuned),
    ];

    let win_rates = contenders
        .iter()
        .map(|&(name, strategy)| {
            let mut dice = DiceSet::from_rng(&mut rng);
            let win_rate = average_win_rate(strategy, &baseline, &mut dice, config.num_samples);
            info!(strategy = name, win_rate, "win rate");
            StrategyWinRate {
                name: name.to_string(),
                win_rate,
            }
        })
        .collect();

    let grid = if config.run_grid_search {
        let mut dice = DiceSet::from_rng(&mut rng);
        grid_search(&config.grid, &baseline, &mut dice, config.num_samples)?
    } else {
        Vec::new()
    };

    Ok(ExperimentReport {
        seed: config.seed,
        six_sided_max,
        four_sided_max,
        win_rates,
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiments::MetaFinalGrid;

    fn quick_config() -> ExperimentConfig {
        ExperimentConfig::new().with_num_samples(50).with_roll_samples(500)
    }

    #[test]
    fn test_report_has_every_strategy() {
        let report = run_experiments(&quick_config()).unwrap();
        let names: Vec<_> = report.win_rates.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "always_roll(8)",
                "bacon_strategy",
                "swap_strategy",
                "delta_strategy",
                "final_strategy"
            ]
        );
        assert!(report.grid.is_empty());
        assert!(report.best_grid_result().is_none());
        assert!(report.win_rate("final_strategy").is_some());
        assert!(report.win_rate("missing").is_none());
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = run_experiments(&quick_config()).unwrap();
        let b = run_experiments(&quick_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_search_does_not_shift_other_results() {
        let small_grid = MetaFinalGrid {
            four_cutoffs: 2..3,
            four_counts: 3..4,
            six_cutoffs: 4..5,
            six_counts: 4..5,
        };
        let plain = run_experiments(&quick_config()).unwrap();
        let with_grid = run_experiments(&quick_config().with_grid_search(small_grid)).unwrap();

        assert_eq!(plain.win_rates, with_grid.win_rates);
        assert_eq!(with_grid.grid.len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = run_experiments(&quick_config().with_num_samples(0));
        assert_eq!(result, Err(ExperimentError::ZeroSamples { field: "num_samples" }));
    }

    #[test]
    fn test_display_lines() {
        let report = ExperimentReport {
            seed: 1,
            six_sided_max: 6,
            four_sided_max: 4,
            win_rates: vec![StrategyWinRate {
                name: "final_strategy".to_string(),
                win_rate: 0.75,
            }],
            grid: Vec::new(),
        };
        let text = report.to_string();
        assert!(text.contains("Max scoring num rolls for six-sided dice: 6"));
        assert!(text.contains("Max scoring num rolls for four-sided dice: 4"));
        assert!(text.contains("final_strategy win rate: 0.75"));
    }
}
