//! # frog_pathfinding
//!
//! A frog crossing a pond of hexagonal cells. At every step the frog greedily hops to the
//! cheapest reachable cell according to a terrain heuristic (food first, then lily pads, reeds
//! and open water, never mud or anything next to an alligator), and backtracks
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) when it is stuck. From a
//! lily pad the frog can also jump two cells far. This is not a shortest path search: the
//! result is the trace of the walk, dead ends included, and the number of flies eaten on the
//! way.
//!
//! Candidates at each decision point are ranked by a [UniquePriorityQueue], a small sorted
//! queue that refuses duplicates and breaks ties by arrival order, which makes the walk fully
//! deterministic.
pub mod pond;
pub mod solver;
pub mod unique_queue;

pub use pond::{CellId, HexDirection, Mark, Pond, PondError, Terrain};
pub use solver::greedy::{GreedySolver, TerrainCosts};
pub use solver::{FrogPath, Hop, PondSolver};
pub use unique_queue::{QueueError, UniquePriorityQueue};

/// Priority of an end cell. Below every terrain so a visible goal is always taken.
pub const GOAL_COST: f64 = -1.0;
/// Extra cost of a two-hop jump that keeps its direction.
pub const INLINE_JUMP_COST: f64 = 0.5;
/// Extra cost of a two-hop jump that turns halfway.
pub const ANGLED_JUMP_COST: f64 = 1.0;
