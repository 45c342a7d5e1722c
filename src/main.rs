use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use wiring_cut::cuts::{estimate, CutConfig, DEFAULT_TOP_K, DEFAULT_TRIALS};
use wiring_cut::Wiring;

/// Cut a component wiring diagram into two groups and print the product of their sizes.
#[derive(Parser, Debug)]
#[command(name = "wiring-cut", version)]
struct Cli {
    /// Wiring diagram, one `<label>: <label> <label> ...` line per component
    input: PathBuf,

    /// Distinct component pairs to explore
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Wires to remove, counting both directions of each
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Explore component pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Stop early once the cut wires outnumber the rest by this ratio
    #[arg(long)]
    separation: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let wiring: Wiring = text
        .parse()
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    info!(
        "loaded {} components and {} wires",
        wiring.node_count(),
        wiring.edge_count()
    );

    let config = CutConfig {
        trials: cli.trials,
        top_k: cli.top_k,
        seed: cli.seed,
        parallel: cli.parallel,
        separation: cli.separation,
    };
    let estimate = estimate(&wiring, &config).context("failed to split the wiring")?;
    info!("explored {} component pairs", estimate.trials_run);

    println!("{}", estimate.product());
    Ok(())
}
