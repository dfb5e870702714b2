use std::num::NonZero;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::stats::{estimate, run_trial};
use percolate::Engine;

/// Estimate the site percolation threshold of an N×N grid by opening random sites until it percolates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the grid
    #[arg(short, long, default_value_t = NonZero::new(20).unwrap())]
    size: NonZero<usize>,
    /// Number of independent trials
    #[arg(short, long, default_value_t = 100)]
    trials: usize,
    /// One of quick-find, weighted, union-find, rescan, dfs, bfs
    #[arg(short, long, default_value_t = Engine::UnionFind)]
    engine: Engine,
    /// Seed for the site ordering; random if absent
    #[arg(long)]
    seed: Option<u64>,
    /// Run a single trial and print the grid once it percolates
    #[arg(long)]
    show: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.show {
        let mut system = args.engine.build(args.size);
        return match run_trial(system.as_mut(), &mut rng) {
            Ok(fraction) => {
                print!("{}", system.render());
                println!("percolated at {fraction:.4} ({} open sites)", system.number_of_open_sites());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("trial failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    info!("running {} trials of {} on a {}x{} grid", args.trials, args.engine, args.size, args.size);
    match estimate(args.engine, args.size, args.trials, &mut rng) {
        Ok(estimate) => {
            println!("mean                    = {:.6}", estimate.mean);
            println!("stddev                  = {:.6}", estimate.stddev);
            println!("95% confidence interval = [{:.6}, {:.6}]", estimate.confidence_low, estimate.confidence_high);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
