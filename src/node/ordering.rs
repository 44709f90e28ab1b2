//! Node ordering variants.
//!
//! An ordering maps a node to an `f64` key; priority containers explore or
//! retain the smallest keys first. Each ordering is bounded on exactly the
//! capability it reads, so using A* on a problem without a heuristic is a
//! compile error rather than a runtime surprise.

use super::Node;
use crate::problem::{HeuristicProblem, Problem, ValueProblem};

/// Computes the priority key of a node. Lower keys come first.
pub trait NodeOrdering<P: Problem> {
    fn key(&self, problem: &P, node: &Node<P::State, P::Action>) -> f64;
}

/// Constant key: container insertion order decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unordered;

impl<P: Problem> NodeOrdering<P> for Unordered {
    fn key(&self, _problem: &P, _node: &Node<P::State, P::Action>) -> f64 {
        0.0
    }
}

/// Key = path cost (uniform-cost search).
#[derive(Debug, Clone, Copy, Default)]
pub struct CostOrdered;

impl<P: Problem> NodeOrdering<P> for CostOrdered {
    fn key(&self, _problem: &P, node: &Node<P::State, P::Action>) -> f64 {
        node.path_cost()
    }
}

/// Key = heuristic estimate (greedy search).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicOrdered;

impl<P: HeuristicProblem> NodeOrdering<P> for HeuristicOrdered {
    fn key(&self, problem: &P, node: &Node<P::State, P::Action>) -> f64 {
        problem.heuristic(node.state())
    }
}

/// Key = path cost + heuristic estimate (A*).
#[derive(Debug, Clone, Copy, Default)]
pub struct StarOrdered;

impl<P: HeuristicProblem> NodeOrdering<P> for StarOrdered {
    fn key(&self, problem: &P, node: &Node<P::State, P::Action>) -> f64 {
        node.path_cost() + problem.heuristic(node.state())
    }
}

/// Key = negated value, so a min-ordered container keeps the best states.
///
/// A NaN value gets the worst key, `+inf`, whatever its sign bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueOrdered;

impl<P: ValueProblem> NodeOrdering<P> for ValueOrdered {
    fn key(&self, problem: &P, node: &Node<P::State, P::Action>) -> f64 {
        let value = problem.value(node.state());
        if value.is_nan() {
            f64::INFINITY
        } else {
            -value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeRef;
    use crate::testing::{EightPuzzle, Hill};

    #[test]
    fn test_keys_derive_from_same_node() {
        let puzzle = EightPuzzle::new([1, 2, 3, 4, 5, 6, 0, 7, 8]);
        let root: NodeRef<_, _> = Node::root(puzzle.start);
        let child = root
            .expand(&puzzle)
            .into_iter()
            .next()
            .expect("puzzle start has moves");

        let h = puzzle.heuristic(child.state());
        assert_eq!(Unordered.key(&puzzle, &child), 0.0);
        assert_eq!(CostOrdered.key(&puzzle, &child), 1.0);
        assert_eq!(HeuristicOrdered.key(&puzzle, &child), h);
        assert_eq!(StarOrdered.key(&puzzle, &child), 1.0 + h);
    }

    #[test]
    fn test_value_key_is_negated_value() {
        let hill = Hill::new(7);
        let node: NodeRef<i64, i64> = Node::root(3);
        assert_eq!(ValueOrdered.key(&hill, &node), 16.0);
        let peak: NodeRef<i64, i64> = Node::root(7);
        assert!(ValueOrdered.key(&hill, &peak) < ValueOrdered.key(&hill, &node));
    }

    #[test]
    fn test_nan_value_is_worst_key() {
        struct Blank;

        impl crate::problem::Problem for Blank {
            type State = i64;
            type Action = i64;

            fn initial_state(&self) -> i64 {
                0
            }
        }

        impl ValueProblem for Blank {
            fn value(&self, state: &i64) -> f64 {
                match state {
                    0 => f64::NAN,
                    1 => -f64::NAN,
                    _ => f64::MIN,
                }
            }
        }

        let worst_real: NodeRef<i64, i64> = Node::root(2);
        for state in [0, 1] {
            let nan: NodeRef<i64, i64> = Node::root(state);
            assert_eq!(ValueOrdered.key(&Blank, &nan), f64::INFINITY);
            assert!(ValueOrdered.key(&Blank, &worst_real) < ValueOrdered.key(&Blank, &nan));
        }
    }
}
