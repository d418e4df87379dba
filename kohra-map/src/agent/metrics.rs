//! Run metrics accumulated across an agent's lifetime.

use std::time::Duration;

use serde::Serialize;

use crate::core::Coord;

/// Everything a run reports: populated incrementally by `step()` and
/// finalized by `run()`. `path_taken` always begins with the start cell.
#[derive(Clone, Debug, Serialize)]
pub struct Metrics {
    pub start: Coord,
    pub goal: Coord,
    /// Moves executed (one per cell entered)
    pub steps: usize,
    /// Plans discarded after a planned cell turned out to be a wall
    pub replans: usize,
    /// Neighbor expansions summed over every planning call
    pub nodes_expanded: usize,
    /// Search runtime summed over every planning call; falls back to the
    /// whole run's wall clock when no search ever ran
    pub runtime: Duration,
    /// Unit-cost path cost: `path_taken.len() - 1`
    pub cost: usize,
    pub reached_goal: bool,
    /// Every cell visited, in order, starting at `start`
    pub path_taken: Vec<Coord>,
}

impl Metrics {
    pub fn new(start: Coord, goal: Coord) -> Self {
        Self {
            start,
            goal,
            steps: 0,
            replans: 0,
            nodes_expanded: 0,
            runtime: Duration::ZERO,
            cost: 0,
            reached_goal: false,
            path_taken: vec![start],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_start_with_the_start_cell() {
        let m = Metrics::new(Coord::new(1, 2), Coord::new(3, 4));
        assert_eq!(m.path_taken, vec![Coord::new(1, 2)]);
        assert_eq!(m.steps, 0);
        assert_eq!(m.cost, 0);
        assert!(!m.reached_goal);
    }
}
