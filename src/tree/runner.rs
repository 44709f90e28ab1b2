//! Generic tree/graph search loop.
//!
//! # Algorithm
//!
//! 1. Push the root node (in graph mode, record its state as seen)
//! 2. Pop the next node; if it is a goal, return it
//! 3. If there is no depth limit or `depth < limit`, expand it and push
//!    every child (in graph mode, only children with unseen states, which
//!    are recorded as seen)
//! 4. Repeat until the fringe is empty; then there is no solution
//!
//! The fringe decides the strategy: FIFO gives breadth-first, LIFO
//! depth-first, a priority queue uniform-cost, greedy or A* depending on
//! the node ordering.

use super::config::{IterativeConfig, SearchConfig};
use crate::fringe::{BoundedPriorityQueue, Fringe, LifoFringe};
use crate::node::{Node, NodeOrdering, NodeRef};
use crate::problem::SearchProblem;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Result of a tree or graph search.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    /// The goal node, or `None` when the explored space held no goal.
    pub solution: Option<NodeRef<S, A>>,

    /// Number of nodes expanded.
    pub expanded: usize,

    /// Size of the seen-state set at the end (0 in tree mode).
    pub visited: usize,

    /// Largest fringe size observed.
    pub max_fringe: usize,

    /// Depth limit of the run that produced this result.
    ///
    /// For iterative deepening, the last limit tried.
    pub depth_limit: Option<usize>,
}

impl<S, A> SearchResult<S, A> {
    /// Whether a goal was reached.
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Executes the generic search loop.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search loop with the given fringe.
    ///
    /// The fringe should be empty; the root node is pushed onto it.
    pub fn run<P, F>(
        problem: &P,
        mut fringe: F,
        config: &SearchConfig,
    ) -> SearchResult<P::State, P::Action>
    where
        P: SearchProblem,
        F: Fringe<NodeRef<P::State, P::Action>>,
    {
        debug!(
            graph_search = config.graph_search,
            depth_limit = ?config.depth_limit,
            "starting search"
        );

        let mut memory: HashSet<P::State> = HashSet::new();
        let root = Node::root(problem.initial_state());
        if config.graph_search {
            memory.insert(root.state().clone());
        }
        fringe.push(root);

        let mut expanded = 0usize;
        let mut max_fringe = fringe.len();

        while let Some(node) = fringe.pop() {
            if problem.is_goal(node.state()) {
                debug!(
                    depth = node.depth(),
                    path_cost = node.path_cost(),
                    expanded,
                    "goal reached"
                );
                return SearchResult {
                    solution: Some(node),
                    expanded,
                    visited: memory.len(),
                    max_fringe,
                    depth_limit: config.depth_limit,
                };
            }

            if config.depth_limit.is_none_or(|limit| node.depth() < limit) {
                expanded += 1;
                for child in node.expand(problem) {
                    if config.graph_search && !memory.insert(child.state().clone()) {
                        continue;
                    }
                    fringe.push(child);
                }
                max_fringe = max_fringe.max(fringe.len());
                trace!(depth = node.depth(), fringe = fringe.len(), "expanded node");
            }
        }

        debug!(expanded, visited = memory.len(), "fringe exhausted");
        SearchResult {
            solution: None,
            expanded,
            visited: memory.len(),
            max_fringe,
            depth_limit: config.depth_limit,
        }
    }

    /// Runs the search loop on an unbounded priority fringe ranked by
    /// `ordering`.
    pub fn run_ordered<P, O>(
        problem: &P,
        ordering: O,
        config: &SearchConfig,
    ) -> SearchResult<P::State, P::Action>
    where
        P: SearchProblem,
        O: NodeOrdering<P>,
    {
        let fringe = BoundedPriorityQueue::unbounded(|node: &NodeRef<P::State, P::Action>| {
            ordering.key(problem, node)
        });
        Self::run(problem, fringe, config)
    }

    /// Iterative deepening: depth-limited depth-first runs with limits
    /// 0, 1, 2, … until one finds a goal.
    ///
    /// Without `max_depth`, this does not return if no goal is reachable
    /// in an infinite space. Statistics are summed over all runs, except
    /// `visited` and `max_fringe`, which are the maxima over runs.
    pub fn run_iterative<P>(
        problem: &P,
        config: &IterativeConfig,
    ) -> SearchResult<P::State, P::Action>
    where
        P: SearchProblem,
    {
        let mut limit = 0usize;
        let mut expanded = 0usize;
        let mut visited = 0usize;
        let mut max_fringe = 0usize;

        loop {
            let run_config = SearchConfig {
                graph_search: config.graph_search,
                depth_limit: Some(limit),
            };
            let result = Self::run(problem, LifoFringe::new(), &run_config);
            expanded += result.expanded;
            visited = visited.max(result.visited);
            max_fringe = max_fringe.max(result.max_fringe);
            trace!(limit, solved = result.is_solved(), "deepening pass finished");

            if result.solution.is_some() || config.max_depth.is_some_and(|max| limit >= max) {
                debug!(
                    limit,
                    expanded,
                    solved = result.is_solved(),
                    "iterative deepening finished"
                );
                return SearchResult {
                    solution: result.solution,
                    expanded,
                    visited,
                    max_fringe,
                    depth_limit: Some(limit),
                };
            }
            limit += 1;
        }
    }
}
