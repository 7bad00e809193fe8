use clap::Parser;
use log::{warn, LevelFilter};
use percolation::{PercolationStats, RunConfig, SamplingPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "percolation")]
#[command(about = "Estimate the percolation threshold of an n-by-n grid by Monte Carlo simulation")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Grid side length n
    grid_size: Option<i64>,

    /// Number of independent trials
    trials: Option<i64>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Site sampling policy (all-sites, closed-sites)
    #[arg(long)]
    policy: Option<String>,

    /// Load run parameters from a JSON file (positional arguments override)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective run parameters to a JSON file
    #[arg(long = "save-config")]
    save_config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Log level on stderr (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let mut config = match &args.config {
        Some(path) => RunConfig::load_from_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(n) = args.grid_size {
        config.grid_size = n;
    }
    if let Some(t) = args.trials {
        config.trials = t;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(name) = &args.policy {
        match SamplingPolicy::parse(name) {
            Some(policy) => config.policy = policy,
            None => warn!("unknown sampling policy '{}', using {}", name, config.policy.name()),
        }
    }

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stats = PercolationStats::run(config.grid_size, config.trials, config.policy, &mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats.summary())?);
    } else {
        println!("{:<16} = {:.6}", "mean()", stats.mean());
        println!("{:<16} = {:.6}", "stddev()", stats.stddev());
        println!("{:<16} = {:.6}", "confidenceLow()", stats.confidence_low());
        println!("{:<16} = {:.6}", "confidenceHigh()", stats.confidence_high());
        println!("{:<16} = {:.6}", "elapsed time", stats.elapsed_secs());
    }

    Ok(())
}
