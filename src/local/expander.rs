//! Fringe expansion strategies for local search.

use crate::fringe::{BoundedPriorityQueue, Fringe};
use crate::node::NodeRef;
use crate::problem::{SearchProblem, ValueProblem};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How one local search iteration grows the fringe.
///
/// The fringe is value-ordered and bounded, so whatever is pushed, only
/// the best `fringe_size` nodes survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expander {
    /// Expand every node in the fringe (beam search).
    All,

    /// Expand only the best node (best-first beam search; hill climbing
    /// with a fringe of one).
    #[default]
    First,

    /// Push one child of the best node, chosen uniformly among the children
    /// whose value is strictly greater than the best's (stochastic hill
    /// climbing).
    RandomBest,
}

impl Expander {
    pub(crate) fn apply<P, K, R>(
        self,
        fringe: &mut BoundedPriorityQueue<NodeRef<P::State, P::Action>, K>,
        problem: &P,
        rng: &mut R,
    ) where
        P: SearchProblem + ValueProblem,
        K: Fn(&NodeRef<P::State, P::Action>) -> f64,
        R: Rng,
    {
        match self {
            Expander::All => {
                let members: Vec<_> = fringe.iter().cloned().collect();
                for node in members {
                    fringe.extend(node.expand(problem));
                }
            }
            Expander::First => {
                if let Some(best) = fringe.peek().cloned() {
                    fringe.extend(best.expand(problem));
                }
            }
            Expander::RandomBest => {
                let Some(current) = fringe.peek().cloned() else {
                    return;
                };
                let current_value = problem.value(current.state());
                let mut betters: Vec<_> = current
                    .expand(problem)
                    .into_iter()
                    .filter(|child| problem.value(child.state()) > current_value)
                    .collect();
                if !betters.is_empty() {
                    let pick = rng.random_range(0..betters.len());
                    fringe.push(betters.swap_remove(pick));
                }
            }
        }
    }
}
