//! Kohra-Nav - Maze simulation front end
//!
//! Loads a CSV maze, runs the online agent with the selected search
//! algorithm in full-knowledge or fog-of-war mode, and prints the run
//! metrics as plain text. The core simulation lives in `kohra-map`; this
//! binary only wires configuration to it and renders the results.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use kohra_map::{strategy_by_name, AgentState, MazeGrid, OnlineAgent};
use kohra_nav::config::SimConfig;
use kohra_nav::error::{NavError, Result};

#[derive(Parser)]
#[command(name = "kohra-nav")]
#[command(about = "Run a fog-of-war maze simulation and print metrics")]
struct Args {
    /// Map CSV file (rows of 0/1/S/G symbols)
    #[arg(short, long)]
    map: PathBuf,

    /// Search algorithm: bfs | dfs | ucs | astar | greedy
    #[arg(short, long)]
    algo: Option<String>,

    /// Limit the agent's perception to fog-of-war radius 1
    #[arg(long)]
    fog: bool,

    /// Step budget for the agent loop
    #[arg(long)]
    max_steps: Option<usize>,

    /// TOML config file with defaults for the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the masked map after the run
    #[arg(long)]
    show_map: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kohra_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    // Config file first, then CLI overrides.
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimConfig::load(path)?
        }
        None => {
            let default_path = Path::new("kohra.toml");
            if default_path.exists() {
                info!("Loading configuration from kohra.toml");
                SimConfig::load(default_path)?
            } else {
                SimConfig::default()
            }
        }
    };

    let mut run = config.run;
    if let Some(algo) = args.algo {
        run.algo = algo;
    }
    if args.fog {
        run.fog = true;
    }
    if let Some(max_steps) = args.max_steps {
        run.max_steps = max_steps;
    }
    if args.show_map {
        run.show_map = true;
    }

    info!("Kohra-Nav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "map={:?} algo={} mode={}",
        args.map,
        run.algo,
        if run.fog { "fog" } else { "no-fog" }
    );

    let grid = MazeGrid::load(&args.map)?;
    let search =
        strategy_by_name(&run.algo).ok_or_else(|| NavError::UnknownAlgorithm(run.algo.clone()))?;

    let mut agent = OnlineAgent::new(grid, !run.fog, search);
    let metrics = agent.run(run.max_steps).clone();

    match agent.state() {
        AgentState::Reached => info!("Goal reached in {} steps", metrics.steps),
        AgentState::Stuck => info!("Agent stuck: no goal path and no frontier left"),
        AgentState::Running => info!("Step budget ({}) exhausted", run.max_steps),
    }

    println!("start:          {}", metrics.start);
    println!("goal:           {}", metrics.goal);
    println!("reached_goal:   {}", metrics.reached_goal);
    println!("steps:          {}", metrics.steps);
    println!("replans:        {}", metrics.replans);
    println!("nodes_expanded: {}", metrics.nodes_expanded);
    println!("cost:           {}", metrics.cost);
    println!("runtime:        {:.6}s", metrics.runtime.as_secs_f64());
    println!("path_length:    {}", metrics.path_taken.len());

    if run.show_map {
        println!();
        println!("{}", agent.grid().render_masked());
    }

    Ok(())
}
