use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use threes::config::{configure, ExecutionMode, SimulationOptions};
use threes::constants::{DEFAULT_NUM_DICE, DEFAULT_NUM_SIMULATIONS};
use threes::env_config::{init_rayon_threads, seed_from_env};
use threes::report::{format_json, format_summary, format_text};
use threes::simulation::run_simulation_with;

#[derive(Parser)]
#[command(name = "threes-simulate")]
#[command(version)]
#[command(about = "Simulate the Threes dice game and print the score distribution")]
struct Args {
    /// Number of dice per game
    #[arg(default_value_t = DEFAULT_NUM_DICE as i64, allow_negative_numbers = true)]
    num_dice: i64,

    /// Number of games to simulate
    #[arg(default_value_t = DEFAULT_NUM_SIMULATIONS as i64, allow_negative_numbers = true)]
    num_simulations: i64,

    /// Master RNG seed (default: $THREES_SEED, else random)
    #[arg(long)]
    seed: Option<u64>,

    /// Run every trial on the main thread
    #[arg(long, conflicts_with = "sharded")]
    sequential: bool,

    /// Use per-worker histograms merged at the end instead of shared atomic counters
    #[arg(long)]
    sharded: bool,

    /// Worker threads (default: $RAYON_NUM_THREADS, else all CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log progress and print summary statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match configure(args.num_dice, args.num_simulations) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mode = if args.sequential {
        ExecutionMode::Sequential
    } else if args.sharded {
        ExecutionMode::Sharded
    } else {
        ExecutionMode::Parallel
    };
    if mode.is_concurrent() {
        init_rayon_threads(args.threads);
    }

    let seed = args
        .seed
        .or_else(seed_from_env)
        .unwrap_or_else(rand::random::<u64>);
    info!(seed, ?mode, "configured");

    let result = run_simulation_with(&config, &SimulationOptions::new(seed, mode));

    if args.json {
        match format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", format_text(&result));
    if args.verbose {
        println!();
        println!("Summary (seed {}):", result.seed);
        print!("{}", format_summary(&result.summary()));
    }
}
