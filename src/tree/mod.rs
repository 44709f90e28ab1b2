//! Tree and graph search.
//!
//! One search loop ([`SearchRunner`]) parameterized by a fringe, a node
//! ordering, an optional depth limit and a graph/tree mode switch. The
//! strategy functions ([`breadth_first_search`], [`astar_search`], …) are
//! fixed configurations of it.
//!
//! # Tree vs. graph mode
//!
//! Tree mode never deduplicates: a state reachable along several paths is
//! explored once per path, and cyclic spaces may not terminate. Graph mode
//! records every generated state and drops children whose state was seen
//! before, so no state is expanded twice.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Korf (1985), "Depth-First Iterative-Deepening: An Optimal Admissible
//!   Tree Search"

mod config;
mod runner;
mod strategies;

pub use config::{IterativeConfig, SearchConfig};
pub use runner::{SearchResult, SearchRunner};
pub use strategies::{
    astar_search, breadth_first_search, depth_first_search, depth_limited_search,
    greedy_search, iterative_deepening_search, uniform_cost_search,
};
