//! Domain-agnostic state-space search framework.
//!
//! Provides generic implementations of classic search strategies over a
//! caller-defined problem:
//!
//! - **Tree & graph search**: breadth-first, depth-first, depth-limited,
//!   iterative deepening, uniform-cost, greedy and A*, all as
//!   configurations of one search loop.
//! - **Local search**: beam search and hill climbing (steepest, stochastic,
//!   random restarts) over a bounded, value-ordered fringe.
//! - **Simulated Annealing (SA)**: a single-node random walk with
//!   temperature-governed acceptance.
//! - **Genetic search (GA)**: a generational population loop with
//!   fitness-proportionate parent sampling.
//!
//! # Architecture
//!
//! A problem implements the capability traits in [`problem`] that its
//! strategy needs. Strategies wrap states in [`node::Node`]s, drive them
//! through a [`fringe`] container or a population, and return a node whose
//! parent chain reconstructs the path. Every stochastic strategy takes an
//! explicit random source, so seeded runs are reproducible.
//!
//! # Example
//!
//! ```
//! use u_search::problem::{Problem, SearchProblem};
//! use u_search::tree::breadth_first_search;
//!
//! /// Reach `target` from 0 with steps of +1 and +3.
//! struct Steps {
//!     target: u32,
//! }
//!
//! impl Problem for Steps {
//!     type State = u32;
//!     type Action = u32;
//!     fn initial_state(&self) -> u32 { 0 }
//! }
//!
//! impl SearchProblem for Steps {
//!     fn actions(&self, state: &u32) -> Vec<u32> {
//!         [1, 3].into_iter().filter(|d| state + d <= self.target).collect()
//!     }
//!     fn result(&self, state: &u32, action: &u32) -> u32 { state + action }
//!     fn is_goal(&self, state: &u32) -> bool { *state == self.target }
//! }
//!
//! let result = breadth_first_search(&Steps { target: 7 }, true);
//! let goal = result.solution.expect("7 is reachable");
//! assert_eq!(goal.depth(), 3);
//! assert_eq!(goal.solution().iter().sum::<u32>(), 7);
//! ```

pub mod error;
pub mod fringe;
pub mod ga;
pub mod local;
pub mod node;
pub mod problem;
pub mod random;
pub mod sa;
pub mod sampling;
pub mod tree;

#[cfg(test)]
mod testing;

pub use error::SearchError;
pub use node::{Node, NodeRef};
pub use problem::{
    GeneticProblem, HeuristicProblem, Problem, RandomStateProblem, SearchProblem, ValueProblem,
};
