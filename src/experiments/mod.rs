//! Monte Carlo experiments over strategies.
//!
//! ## Overview
//!
//! - **Averaging**: `make_averaged` turns any sampler into its mean
//! - **Roll counts**: `max_scoring_num_rolls` finds the best fixed dice count
//! - **Win rates**: `average_win_rate` pits a strategy against a baseline
//!   from both seats
//! - **Grid search**: `grid_search` tunes the four `MetaFinal` parameters
//! - **Runner**: `run_experiments` does all of the above from one
//!   `ExperimentConfig` and returns a serializable `ExperimentReport`
//!
//! ## Usage
//!
//! ```
//! use rust_hog::experiments::{run_experiments, ExperimentConfig};
//!
//! let config = ExperimentConfig::default()
//!     .with_num_samples(20)
//!     .with_roll_samples(100)
//!     .with_seed(7);
//!
//! let report = run_experiments(&config).unwrap();
//! assert!((1..=10).contains(&report.six_sided_max));
//! println!("{}", report);
//! ```

pub mod averaging;
pub mod config;
pub mod grid;
pub mod report;
pub mod win_rate;

pub use averaging::{make_averaged, max_scoring_num_rolls};
pub use config::{ExperimentConfig, ExperimentError};
pub use grid::{best_result, grid_search, GridResult, MetaFinalGrid};
pub use report::{run_experiments, ExperimentReport, StrategyWinRate};
pub use win_rate::{average_win_rate, winner};
