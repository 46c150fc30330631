//! Hog command line: runs the strategy experiments.

use clap::Parser;
use rust_hog::experiments::{run_experiments, ExperimentConfig, MetaFinalGrid};
use tracing::info;

#[derive(Parser)]
#[command(name = "hog")]
#[command(about = "Play Hog")]
struct Args {
    /// Runs strategy experiments
    #[arg(short, long, alias = "run_experiments")]
    run_experiments: bool,

    /// Seed for all dice
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Games per seat when estimating win rates
    #[arg(long, default_value = "1000")]
    samples: usize,

    /// Samples per dice count when searching for the best roll count
    #[arg(long, default_value = "10000")]
    roll_samples: usize,

    /// Also search MetaFinal parameters
    #[arg(long)]
    grid: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !args.run_experiments {
        info!("nothing to do without --run-experiments");
        return Ok(());
    }

    let mut config = ExperimentConfig::new()
        .with_seed(args.seed)
        .with_num_samples(args.samples)
        .with_roll_samples(args.roll_samples);
    if args.grid {
        config = config.with_grid_search(MetaFinalGrid::default());
    }

    info!(seed = config.seed, samples = config.num_samples, "running experiments");
    let report = run_experiments(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
