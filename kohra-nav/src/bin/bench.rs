//! Benchmark runner for the maze simulator.
//!
//! Sweeps generated mazes across sizes, algorithms, modes, and seeds, and
//! writes one CSV row per trial: the trial parameters followed by the
//! agent's metrics fields. Sizes are coerced to odd by the generator;
//! "fog" mode runs with partial observability, "no-fog" gives the agent
//! the full map as a baseline.
//!
//! ```bash
//! kohra-bench --min 51 --max 151 --step 50 --seeds 3 --braid 0.10 -o reports/bench.csv
//! kohra-bench --algos bfs astar greedy --modes no-fog -o reports/bench_subset.csv
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use kohra_map::harness::{generate_grid, MazeSpec};
use kohra_map::{strategy_by_name, OnlineAgent};
use kohra_nav::error::{NavError, Result};

#[derive(Parser)]
#[command(name = "kohra-bench")]
#[command(about = "Benchmark maze search algorithms over generated mazes")]
struct Args {
    /// Minimum maze size (odd recommended)
    #[arg(long, default_value = "51")]
    min: usize,

    /// Maximum maze size (inclusive)
    #[arg(long, default_value = "151")]
    max: usize,

    /// Size increment
    #[arg(long, default_value = "50")]
    step: usize,

    /// Number of RNG seeds per size
    #[arg(long, default_value = "3")]
    seeds: u64,

    /// Dead-end braiding fraction [0..1]
    #[arg(long, default_value = "0.10")]
    braid: f64,

    /// Algorithms to benchmark
    #[arg(long, num_args = 1.., default_values = ["bfs", "ucs", "astar", "greedy"])]
    algos: Vec<String>,

    /// Agent modes to run
    #[arg(long, num_args = 1.., default_values = ["no-fog", "fog"])]
    modes: Vec<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "reports/bench.csv")]
    out: PathBuf,
}

/// One benchmark trial: generate a maze, run the agent, report a CSV row.
fn run_trial(size: usize, algo: &str, mode: &str, seed: u64, braid: f64) -> Result<String> {
    let spec = MazeSpec {
        width: size,
        height: size,
        seed,
        braid,
    };
    let grid = generate_grid(&spec)?;

    let search =
        strategy_by_name(algo).ok_or_else(|| NavError::UnknownAlgorithm(algo.to_string()))?;
    let full_knowledge = mode == "no-fog";
    let mut agent = OnlineAgent::new(grid, full_knowledge, search);

    // Generous cap to avoid runaway trials; generated mazes are solvable.
    let max_steps = size * size * 4;
    let m = agent.run(max_steps);

    Ok(format!(
        "{},{},{},{},{},{},{},{},{},{},{:.6},{}",
        size,
        size,
        seed,
        mode,
        algo,
        braid,
        m.reached_goal,
        m.steps,
        m.replans,
        m.nodes_expanded,
        m.runtime.as_secs_f64(),
        m.cost,
    ))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kohra_bench=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    for mode in &args.modes {
        if mode != "fog" && mode != "no-fog" {
            return Err(NavError::UnknownMode(mode.clone()));
        }
    }
    for algo in &args.algos {
        if strategy_by_name(algo).is_none() {
            return Err(NavError::UnknownAlgorithm(algo.clone()));
        }
    }

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(&args.out)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "width,height,seed,mode,algo,braid,reached_goal,steps,replans,nodes_expanded,runtime,cost"
    )?;

    let mut trials = 0usize;
    let mut size = args.min;
    while size <= args.max {
        info!("Benchmarking size {}x{}", size, size);
        for seed in 0..args.seeds {
            for mode in &args.modes {
                for algo in &args.algos {
                    let row = run_trial(size, algo, mode, seed, args.braid)?;
                    writeln!(writer, "{}", row)?;
                    trials += 1;
                }
            }
        }
        size += args.step.max(1);
    }

    writer.flush()?;
    info!("Wrote {} trials to {:?}", trials, args.out);
    Ok(())
}
