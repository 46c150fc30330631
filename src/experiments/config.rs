//! Experiment configuration and its validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::MAX_ROLLS;

use super::grid::MetaFinalGrid;

/// Why an experiment configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    /// A sample count was zero.
    #[error("{field} must be at least 1")]
    ZeroSamples {
        /// Name of the offending config field.
        field: &'static str,
    },

    /// A grid search range had no values.
    #[error("grid parameter {parameter} has an empty range")]
    EmptyRange {
        /// Name of the empty `MetaFinalGrid` range.
        parameter: &'static str,
    },

    /// The baseline strategy would roll more dice than allowed.
    #[error("baseline cannot roll {rolls} dice (at most 10)")]
    InvalidBaseline {
        /// Dice count that was requested.
        rolls: u32,
    },
}

/// Configuration for a full experiment run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Games per seat when estimating a win rate.
    pub num_samples: usize,

    /// Samples per dice count when searching for the best roll count.
    pub roll_samples: usize,

    /// Seed for every die used in the run.
    /// Same seed produces the same report.
    pub seed: u64,

    /// The baseline opponent always rolls this many dice.
    pub baseline_rolls: u32,

    /// Also run the `MetaFinal` parameter search.
    pub run_grid_search: bool,

    /// Ranges for the parameter search.
    pub grid: MetaFinalGrid,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            roll_samples: 10_000,
            seed: 42,
            baseline_rolls: 5,
            run_grid_search: false,
            grid: MetaFinalGrid::default(),
        }
    }
}

impl ExperimentConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per seat for win rates.
    #[must_use]
    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set samples per dice count for the roll-count search.
    #[must_use]
    pub fn with_roll_samples(mut self, roll_samples: usize) -> Self {
        self.roll_samples = roll_samples;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the baseline dice count.
    #[must_use]
    pub fn with_baseline_rolls(mut self, rolls: u32) -> Self {
        self.baseline_rolls = rolls;
        self
    }

    /// Enable the parameter search over `grid`.
    #[must_use]
    pub fn with_grid_search(mut self, grid: MetaFinalGrid) -> Self {
        self.run_grid_search = true;
        self.grid = grid;
        self
    }

    /// Check the configuration before running anything.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.num_samples == 0 {
            return Err(ExperimentError::ZeroSamples { field: "num_samples" });
        }
        if self.roll_samples == 0 {
            return Err(ExperimentError::ZeroSamples { field: "roll_samples" });
        }
        if self.baseline_rolls > MAX_ROLLS {
            return Err(ExperimentError::InvalidBaseline {
                rolls: self.baseline_rolls,
            });
        }
        if self.run_grid_search {
            self.grid.validate()?;
        }
        Ok(())
    }
}
