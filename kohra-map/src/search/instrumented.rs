//! Instrumented search: expansion counting and timing as a wrapper.
//!
//! The neighbor function is decorated with an invocation counter (the
//! algorithms call it once per expanded node) and the underlying search
//! call is bracketed by a wall clock. The algorithm body is never
//! duplicated, so the instrumented path is identical to the plain one by
//! construction.

use std::time::{Duration, Instant};

use log::debug;

use super::{NeighborFn, SearchStrategy};
use crate::core::Coord;

/// Outcome of an instrumented search call.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Inclusive path, empty when the goal is unreachable
    pub path: Vec<Coord>,
    /// Neighbor-function invocations (one per node expansion)
    pub nodes_expanded: usize,
    /// Wall-clock duration of the search call
    pub runtime: Duration,
    /// Unit-cost path cost: `path.len() - 1`, or 0 for no path
    pub cost: usize,
}

/// Run `strategy` with expansion counting and timing.
pub fn run_instrumented(
    strategy: &dyn SearchStrategy,
    start: Coord,
    goal: Coord,
    neighbors: &mut NeighborFn<'_>,
) -> SearchResult {
    let mut expansions = 0usize;
    let mut counted = |pos: Coord| -> Vec<Coord> {
        expansions += 1;
        neighbors(pos)
    };

    let started = Instant::now();
    let path = strategy.search(start, goal, &mut counted);
    let runtime = started.elapsed();

    let cost = path.len().saturating_sub(1);
    debug!(
        "{}: {} -> {}, path_len={}, nodes_expanded={}, runtime={:?}",
        strategy.name(),
        start,
        goal,
        path.len(),
        expansions,
        runtime
    );

    SearchResult {
        path,
        nodes_expanded: expansions,
        runtime,
        cost,
    }
}
