//! One entry point per uninformed and informed strategy.
//!
//! Each is a configuration of [`SearchRunner`]:
//!
//! | Strategy | Fringe | Ordering |
//! |---|---|---|
//! | breadth-first | FIFO | insertion |
//! | depth-first | LIFO | insertion |
//! | depth-limited | LIFO + depth limit | insertion |
//! | iterative deepening | repeated depth-limited | insertion |
//! | uniform-cost | priority | path cost |
//! | greedy | priority | heuristic |
//! | A* | priority | path cost + heuristic |

use super::config::{IterativeConfig, SearchConfig};
use super::runner::{SearchResult, SearchRunner};
use crate::fringe::{FifoFringe, LifoFringe};
use crate::node::{CostOrdered, HeuristicOrdered, StarOrdered};
use crate::problem::{HeuristicProblem, SearchProblem};

/// Breadth-first search. In tree mode on a finite acyclic space, returns a
/// goal of minimum depth.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default().with_graph_search(graph_search);
    SearchRunner::run(problem, FifoFringe::new(), &config)
}

/// Depth-first search. Tree mode does not terminate on cyclic spaces.
pub fn depth_first_search<P: SearchProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default().with_graph_search(graph_search);
    SearchRunner::run(problem, LifoFringe::new(), &config)
}

/// Depth-first search that does not expand nodes at `depth_limit`.
pub fn depth_limited_search<P: SearchProblem>(
    problem: &P,
    depth_limit: usize,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default()
        .with_graph_search(graph_search)
        .with_depth_limit(depth_limit);
    SearchRunner::run(problem, LifoFringe::new(), &config)
}

/// Iterative deepening depth-first search.
///
/// Unbounded: if no goal is reachable in an infinite space, this never
/// returns. Use [`SearchRunner::run_iterative`] with
/// [`IterativeConfig::max_depth`] to bound it.
pub fn iterative_deepening_search<P: SearchProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = IterativeConfig::default().with_graph_search(graph_search);
    SearchRunner::run_iterative(problem, &config)
}

/// Uniform-cost search: expands the cheapest path first.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default().with_graph_search(graph_search);
    SearchRunner::run_ordered(problem, CostOrdered, &config)
}

/// Greedy best-first search: expands the node that looks closest to a goal.
pub fn greedy_search<P: HeuristicProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default().with_graph_search(graph_search);
    SearchRunner::run_ordered(problem, HeuristicOrdered, &config)
}

/// A* search. In tree mode with an admissible heuristic, returns a goal of
/// minimum path cost.
pub fn astar_search<P: HeuristicProblem>(
    problem: &P,
    graph_search: bool,
) -> SearchResult<P::State, P::Action> {
    let config = SearchConfig::default().with_graph_search(graph_search);
    SearchRunner::run_ordered(problem, StarOrdered, &config)
}
