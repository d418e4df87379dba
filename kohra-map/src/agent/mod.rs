//! Online perceive-plan-act agent with frontier-exploration fallback.
//!
//! The agent owns the authoritative grid and a belief state derived from
//! it. Each `step()` runs one full cycle: perceive (fog mode), check the
//! goal, plan if no plan is held, then act on one plan coordinate. When no
//! route to the goal is known yet, it plans to the nearest frontier cell
//! instead and keeps exploring; when neither a goal path nor a frontier
//! exists the run ends in the `Stuck` terminal state. Inability to
//! progress is a state, never an error.

mod metrics;

pub use metrics::Metrics;

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::debug;

use crate::core::{Coord, Tile};
use crate::grid::MazeGrid;
use crate::search::{run_instrumented, SearchStrategy};

/// What one `step()` call concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The cycle ran; call `step()` again to keep going
    Continue,
    /// Terminal: the agent reached the goal or is stuck
    Done,
}

/// Lifecycle of the agent's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// Perceive-plan-act cycles are still running
    Running,
    /// Terminal: standing on the goal cell
    Reached,
    /// Terminal: no goal path and no frontier left to explore
    Stuck,
}

/// The agent's belief state: cells classified from what the grid revealed.
///
/// A derived cache, not a second ledger: entries are only ever added from
/// `reveal_from` results (or, in full-knowledge mode, the whole layout at
/// construction), so both sets grow monotonically and stay disjoint.
#[derive(Clone, Debug, Default)]
pub struct KnownWorld {
    passable: HashSet<Coord>,
    walls: HashSet<Coord>,
}

impl KnownWorld {
    fn classify(&mut self, coord: Coord, tile: Tile) {
        if tile.is_passable() {
            self.passable.insert(coord);
        } else {
            self.walls.insert(coord);
        }
    }

    /// Has this cell been classified either way?
    #[inline]
    pub fn is_known(&self, c: Coord) -> bool {
        self.passable.contains(&c) || self.walls.contains(&c)
    }

    #[inline]
    pub fn is_known_wall(&self, c: Coord) -> bool {
        self.walls.contains(&c)
    }

    #[inline]
    pub fn is_known_passable(&self, c: Coord) -> bool {
        self.passable.contains(&c)
    }

    /// Known-passable 4-neighbors in the fixed Up, Right, Down, Left order.
    pub fn known_neighbors(&self, pos: Coord) -> Vec<Coord> {
        Coord::OFFSETS4
            .iter()
            .map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|n| self.passable.contains(n))
            .collect()
    }

    /// Number of classified cells (both kinds).
    pub fn len(&self) -> usize {
        self.passable.len() + self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passable.is_empty() && self.walls.is_empty()
    }
}

/// Online agent driving the perceive-plan-act-replan cycle.
pub struct OnlineAgent {
    grid: MazeGrid,
    search: Box<dyn SearchStrategy>,
    full_knowledge: bool,
    current: Coord,
    known: KnownWorld,
    /// Current plan, inclusive of the current position at the front
    plan: VecDeque<Coord>,
    state: AgentState,
    metrics: Metrics,
}

impl OnlineAgent {
    /// Build an agent over an owned grid.
    ///
    /// With `full_knowledge` the belief state is seeded from the entire
    /// layout up front; under fog only the start cell's surroundings are
    /// revealed and classified.
    pub fn new(grid: MazeGrid, full_knowledge: bool, search: Box<dyn SearchStrategy>) -> Self {
        let start = grid.start();
        let goal = grid.goal();
        let mut agent = Self {
            metrics: Metrics::new(start, goal),
            current: start,
            known: KnownWorld::default(),
            plan: VecDeque::new(),
            state: AgentState::Running,
            grid,
            full_knowledge,
            search,
        };

        if full_knowledge {
            for r in 0..agent.grid.height() {
                for c in 0..agent.grid.width() {
                    let coord = Coord::new(r as i32, c as i32);
                    if let Some(tile) = agent.grid.tile_at(coord) {
                        agent.known.classify(coord, tile);
                    }
                }
            }
        } else {
            agent.perceive();
        }
        agent
    }

    /// Reveal around the current position and fold the newly revealed
    /// cells into the belief state.
    fn perceive(&mut self) {
        let revealed = self.grid.reveal_from(self.current);
        for coord in revealed {
            if let Some(tile) = self.grid.tile_at(coord) {
                self.known.classify(coord, tile);
            }
        }
    }

    /// Plan from the current position to `target` with the instrumented
    /// search, using the neighbor view appropriate to the mode. Expansion
    /// counts and runtime accumulate into the metrics.
    fn plan_to(&mut self, target: Coord) -> Vec<Coord> {
        let grid = &self.grid;
        let full = self.full_knowledge;
        let mut neighbors = |pos: Coord| -> Vec<Coord> {
            if full {
                grid.neighbors4(pos)
                    .into_iter()
                    .filter(|&n| grid.passable(n))
                    .collect()
            } else {
                grid.get_visible_neighbors(pos)
            }
        };

        let result = run_instrumented(self.search.as_ref(), self.current, target, &mut neighbors);
        self.metrics.nodes_expanded += result.nodes_expanded;
        self.metrics.runtime += result.runtime;
        result.path
    }

    /// Is `cell` a frontier: known-passable with at least one in-bounds
    /// neighbor that is neither known-passable nor known-wall?
    fn is_frontier(&self, cell: Coord) -> bool {
        Coord::OFFSETS4.iter().any(|&(dr, dc)| {
            let nb = cell.offset(dr, dc);
            self.grid.in_bounds(nb) && !self.known.is_known(nb)
        })
    }

    /// Nearest frontier cell by BFS over the known-passable graph, using
    /// the fixed Up, Right, Down, Left expansion order.
    fn nearest_frontier(&self) -> Option<Coord> {
        let mut visited: HashSet<Coord> = HashSet::from([self.current]);
        let mut queue = VecDeque::from([self.current]);

        while let Some(cur) = queue.pop_front() {
            if self.is_frontier(cur) {
                return Some(cur);
            }
            for n in self.known.known_neighbors(cur) {
                if visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        None
    }

    /// One perceive-plan-act cycle.
    pub fn step(&mut self) -> StepResult {
        // Perceive (fog mode only).
        if !self.full_knowledge {
            self.perceive();
        }

        // Goal check.
        if self.current == self.grid.goal() {
            self.state = AgentState::Reached;
            self.metrics.reached_goal = true;
            return StepResult::Done;
        }

        // Plan, but only when no plan is held.
        if self.plan.is_empty() {
            let goal_path = self.plan_to(self.grid.goal());
            if !goal_path.is_empty() {
                debug!("adopted goal plan, {} waypoints", goal_path.len());
                self.plan = goal_path.into();
            } else {
                let Some(frontier) = self.nearest_frontier() else {
                    debug!("no goal path and no frontier left, stuck");
                    self.state = AgentState::Stuck;
                    return StepResult::Done;
                };
                let frontier_path = self.plan_to(frontier);
                if frontier_path.is_empty() {
                    self.state = AgentState::Stuck;
                    return StepResult::Done;
                }
                debug!(
                    "no goal path yet, exploring toward frontier {}",
                    frontier
                );
                self.plan = frontier_path.into();
            }
        }

        // Act on one plan coordinate.
        if self.plan.len() >= 2 {
            let next = self.plan[1];
            if self.known.is_known_wall(next) {
                // Discovered between planning and acting; replan, no move.
                debug!("planned cell {} is now a known wall, replanning", next);
                self.metrics.replans += 1;
                self.plan.clear();
                return StepResult::Continue;
            }

            self.plan.pop_front();
            self.current = next;
            self.metrics.steps += 1;
            self.metrics.path_taken.push(next);
            if !self.full_knowledge {
                self.perceive();
            }
            return StepResult::Continue;
        }

        // Plan exhausted without reaching the goal; force a replan.
        self.plan.clear();
        StepResult::Continue
    }

    /// Drive `step()` until it reports `Done` or the step budget runs out
    /// (checked between cycles only), then finalize the metrics.
    pub fn run(&mut self, max_steps: usize) -> &Metrics {
        let started = Instant::now();
        let mut cycles = 0;
        while cycles < max_steps {
            if self.step() == StepResult::Done {
                break;
            }
            cycles += 1;
        }

        self.metrics.reached_goal = self.current == self.grid.goal();
        self.metrics.cost = self.metrics.path_taken.len().saturating_sub(1);
        if self.metrics.runtime.is_zero() {
            self.metrics.runtime = started.elapsed();
        }
        &self.metrics
    }

    /// The authoritative grid (read-only view for external tooling).
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// The agent's current position.
    pub fn current(&self) -> Coord {
        self.current
    }

    /// The held plan, current position first; empty between plans.
    pub fn current_plan(&self) -> &VecDeque<Coord> {
        &self.plan
    }

    /// The belief state.
    pub fn known_world(&self) -> &KnownWorld {
        &self.known
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
