//! Interchangeable graph-search strategies and their instrumented form.
//!
//! The algorithms live in [`algorithms`] as free functions over a neighbor
//! callback; [`SearchStrategy`] wraps them behind one object-safe interface
//! so callers can select an algorithm by name at runtime. The instrumented
//! runner in [`instrumented`] adds expansion counting and timing without
//! touching the algorithm bodies.

pub mod algorithms;
mod instrumented;

pub use algorithms::NeighborFn;
pub use instrumented::{run_instrumented, SearchResult};

use crate::core::Coord;

/// One search algorithm behind a uniform interface.
///
/// `neighbors` yields the coordinates reachable in one move from a
/// position; the strategy never learns whether those came from the full
/// map, a fog-limited view, or a belief graph.
pub trait SearchStrategy {
    /// Registry name of this strategy.
    fn name(&self) -> &'static str;

    /// Inclusive path from `start` to `goal`, `[start]` when they are
    /// equal, empty when the goal is unreachable.
    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord>;
}

/// Breadth-first search (shortest path on unit costs).
#[derive(Clone, Copy, Debug, Default)]
pub struct Bfs;

impl SearchStrategy for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord> {
        algorithms::bfs(start, goal, neighbors)
    }
}

/// Depth-first search (some path, not necessarily shortest).
#[derive(Clone, Copy, Debug, Default)]
pub struct Dfs;

impl SearchStrategy for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord> {
        algorithms::dfs(start, goal, neighbors)
    }
}

/// Uniform-cost search (Dijkstra on a unit-cost grid).
#[derive(Clone, Copy, Debug, Default)]
pub struct Ucs;

impl SearchStrategy for Ucs {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord> {
        algorithms::ucs(start, goal, neighbors)
    }
}

/// A* with the Manhattan heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord> {
        algorithms::astar(start, goal, neighbors)
    }
}

/// Greedy best-first (heuristic only, non-optimal).
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl SearchStrategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn search(&self, start: Coord, goal: Coord, neighbors: &mut NeighborFn) -> Vec<Coord> {
        algorithms::greedy(start, goal, neighbors)
    }
}

/// Construct a strategy from its registry name.
pub fn strategy_by_name(name: &str) -> Option<Box<dyn SearchStrategy>> {
    match name {
        "bfs" => Some(Box::new(Bfs)),
        "dfs" => Some(Box::new(Dfs)),
        "ucs" => Some(Box::new(Ucs)),
        "astar" => Some(Box::new(AStar)),
        "greedy" => Some(Box::new(Greedy)),
        _ => None,
    }
}

/// Name-to-strategy registry, built once and passed explicitly.
pub struct SearchRegistry {
    entries: Vec<Box<dyn SearchStrategy>>,
}

impl SearchRegistry {
    /// Registry holding all five algorithms.
    pub fn with_defaults() -> Self {
        Self {
            entries: vec![
                Box::new(Bfs),
                Box::new(Dfs),
                Box::new(Ucs),
                Box::new(AStar),
                Box::new(Greedy),
            ],
        }
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&dyn SearchStrategy> {
        self.entries
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// All registered names, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|s| s.name()).collect()
    }
}

impl Default for SearchRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        let reg = SearchRegistry::with_defaults();
        assert_eq!(reg.names(), vec!["bfs", "dfs", "ucs", "astar", "greedy"]);
        assert!(reg.get("astar").is_some());
        assert!(reg.get("bogus").is_none());
    }

    #[test]
    fn test_strategy_by_name_matches_registry() {
        let reg = SearchRegistry::with_defaults();
        for name in reg.names() {
            let boxed = strategy_by_name(name).expect("registry name must construct");
            assert_eq!(boxed.name(), name);
        }
        assert!(strategy_by_name("dijkstra").is_none());
    }

    #[test]
    fn test_strategy_dispatch_matches_free_function() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let mut open3 = |c: Coord| -> Vec<Coord> {
            Coord::OFFSETS4
                .iter()
                .map(|&(dr, dc)| c.offset(dr, dc))
                .filter(|n| n.row >= 0 && n.row < 3 && n.col >= 0 && n.col < 3)
                .collect()
        };
        let via_trait = AStar.search(start, goal, &mut open3);
        let direct = algorithms::astar(start, goal, &mut open3);
        assert_eq!(via_trait, direct);
    }
}
