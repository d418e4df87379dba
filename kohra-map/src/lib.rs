//! # Kohra-Map: Fog-of-War Maze Exploration Library
//!
//! A library for simulating an agent that must reach a goal cell in a 2-D
//! grid maze while its knowledge of the maze is revealed incrementally.
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`Coord`], [`Tile`])
//! - [`grid`]: the authoritative [`MazeGrid`], an immutable tile layout
//!   plus a monotonic visibility mask (the fog controller) and the CSV
//!   loader
//! - [`search`]: interchangeable graph-search strategies (BFS, DFS, UCS,
//!   A*, greedy best-first) over an abstract neighbor function, and an
//!   instrumented runner reporting expansions and timing
//! - [`agent`]: the [`OnlineAgent`] perceive-plan-act-replan state machine
//!   with frontier-exploration fallback and run [`Metrics`]
//! - [`harness`]: seeded maze generation for benchmarks and tests
//!
//! ## Quick Start
//!
//! ```rust
//! use kohra_map::{MazeGrid, OnlineAgent, AStar};
//!
//! let grid = MazeGrid::parse_str("S,0,0\n0,1,0\n0,0,G").unwrap();
//! let mut agent = OnlineAgent::new(grid, /*full_knowledge=*/ false, Box::new(AStar));
//! let metrics = agent.run(10_000);
//! assert!(metrics.reached_goal);
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   MazeGrid ──reveal_from──► newly visible cells
//!      │                          │
//!      │ visible/passable view    │ classify
//!      ▼                          ▼
//!   neighbor fn ◄── OnlineAgent KnownWorld (belief cache)
//!      │                 │
//!      ▼                 ▼
//!   SearchStrategy ──► Plan ──► one move per step()
//! ```
//!
//! Everything is synchronous and single-threaded: every reveal, search,
//! and step runs to completion before returning.

pub mod agent;
pub mod core;
pub mod grid;
pub mod harness;
pub mod search;

pub use self::agent::{AgentState, KnownWorld, Metrics, OnlineAgent, StepResult};
pub use self::core::{Coord, Tile};
pub use self::grid::{MapError, MazeGrid};
pub use self::harness::MazeSpec;
pub use self::search::{
    run_instrumented, strategy_by_name, AStar, Bfs, Dfs, Greedy, SearchRegistry, SearchResult,
    SearchStrategy, Ucs,
};
