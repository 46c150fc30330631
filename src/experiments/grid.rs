//! Brute-force parameter search for `MetaFinal`.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dice::DiceBag;
use crate::strategy::{MetaFinal, Strategy};

use super::config::ExperimentError;
use super::win_rate::average_win_rate;

/// Parameter ranges to enumerate. Ranges are half-open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFinalGrid {
    /// Cutoffs tried on four-sided turns.
    pub four_cutoffs: Range<u32>,
    /// Dice counts tried on four-sided turns.
    pub four_counts: Range<u32>,
    /// Cutoffs tried on six-sided turns.
    pub six_cutoffs: Range<u32>,
    /// Dice counts tried on six-sided turns.
    pub six_counts: Range<u32>,
}

impl Default for MetaFinalGrid {
    fn default() -> Self {
        Self {
            four_cutoffs: 2..5,
            four_counts: 2..4,
            six_cutoffs: 3..6,
            six_counts: 3..6,
        }
    }
}

impl MetaFinalGrid {
    /// Check that every range has at least one value.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        let ranges = [
            ("four_cutoffs", &self.four_cutoffs),
            ("four_counts", &self.four_counts),
            ("six_cutoffs", &self.six_cutoffs),
            ("six_counts", &self.six_counts),
        ];
        for (parameter, range) in ranges {
            if range.is_empty() {
                return Err(ExperimentError::EmptyRange { parameter });
            }
        }
        Ok(())
    }

    /// Number of parameter combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.four_cutoffs.len()
            * self.four_counts.len()
            * self.six_cutoffs.len()
            * self.six_counts.len()
    }

    /// Does the grid have no combinations at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination, outermost parameter first.
    #[must_use]
    pub fn candidates(&self) -> Vec<MetaFinal> {
        let mut out = Vec::with_capacity(self.len());
        for four_cutoff in self.four_cutoffs.clone() {
            for four_count in self.four_counts.clone() {
                for six_cutoff in self.six_cutoffs.clone() {
                    for six_count in self.six_counts.clone() {
                        out.push(MetaFinal::new(four_cutoff, four_count, six_cutoff, six_count));
                    }
                }
            }
        }
        out
    }
}

/// Win rate of one grid point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridResult {
    /// The strategy at this grid point.
    pub strategy: MetaFinal,
    /// Its average win rate against the baseline.
    pub win_rate: f64,
}

/// Evaluate every grid point against `baseline`, in enumeration order.
pub fn grid_search<T, B>(
    grid: &MetaFinalGrid,
    baseline: &T,
    dice: &mut B,
    num_samples: usize,
) -> Result<Vec<GridResult>, ExperimentError>
where
    T: Strategy + ?Sized,
    B: DiceBag + ?Sized,
{
    grid.validate()?;

    let results = grid
        .candidates()
        .into_iter()
        .map(|strategy| {
            let win_rate = average_win_rate(&strategy, baseline, dice, num_samples);
            info!(params = %strategy, win_rate, "grid point");
            GridResult { strategy, win_rate }
        })
        .collect();

    Ok(results)
}

/// The highest win rate; the earliest point wins ties.
#[must_use]
pub fn best_result(results: &[GridResult]) -> Option<&GridResult> {
    results.iter().fold(None, |best, result| match best {
        Some(b) if b.win_rate >= result.win_rate => Some(b),
        _ => Some(result),
    })
}
