//! Search tree nodes and the orderings that rank them.
//!
//! A [`Node`] records one reached state together with how it was reached:
//! its parent, the action applied, the cumulative path cost and the depth.
//! Nodes are immutable and shared through [`NodeRef`] (`Rc<Node>`), so a
//! child keeps its whole ancestry alive and the solution path can always be
//! rebuilt from the goal node.
//!
//! Priority-based strategies rank nodes through a [`NodeOrdering`]; every
//! ordering derives its key from the same node fields.

mod ordering;

pub use ordering::{
    CostOrdered, HeuristicOrdered, NodeOrdering, StarOrdered, Unordered, ValueOrdered,
};

use crate::problem::SearchProblem;
use std::rc::Rc;

/// Shared handle to a node.
pub type NodeRef<S, A> = Rc<Node<S, A>>;

/// One point in the search tree.
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeRef<S, A>>,
    action: Option<A>,
    path_cost: f64,
    depth: usize,
}

impl<S, A> Node<S, A> {
    /// Creates a root node: no parent, no action, zero cost, depth 0.
    pub fn root(state: S) -> NodeRef<S, A> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        })
    }

    /// The state this node represents.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from, `None` for the root.
    pub fn parent(&self) -> Option<&NodeRef<S, A>> {
        self.parent.as_ref()
    }

    /// The action that produced this node from its parent.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Cumulative cost from the root.
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Number of actions from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterates from this node up to the root, this node first.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }
}

impl<S: Clone, A: Clone> Node<S, A> {
    /// Builds the children of this node, one per applicable action.
    ///
    /// Each child's path cost is this node's cost plus the problem's step
    /// cost, and its depth is one more than this node's.
    pub fn expand<P>(self: &Rc<Self>, problem: &P) -> Vec<Rc<Self>>
    where
        P: SearchProblem<State = S, Action = A>,
    {
        problem
            .actions(&self.state)
            .into_iter()
            .map(|action| {
                let state = problem.result(&self.state, &action);
                let step = problem.cost(&self.state, &action, &state);
                Rc::new(Self {
                    path_cost: self.path_cost + step,
                    depth: self.depth + 1,
                    parent: Some(Rc::clone(self)),
                    action: Some(action),
                    state,
                })
            })
            .collect()
    }

    /// The `(action, state)` steps from the root to this node.
    ///
    /// The first entry is the root, whose action is `None`.
    pub fn path(&self) -> Vec<(Option<A>, S)> {
        let mut steps: Vec<(Option<A>, S)> = self
            .ancestors()
            .map(|n| (n.action.clone(), n.state.clone()))
            .collect();
        steps.reverse();
        steps
    }

    /// The actions leading from the root to this node.
    pub fn solution(&self) -> Vec<A> {
        let mut actions: Vec<A> = self.ancestors().filter_map(|n| n.action.clone()).collect();
        actions.reverse();
        actions
    }
}

// Unlinks the parent chain iteratively; deep chains would otherwise
// overflow the stack through recursive `Rc` drops.
impl<S, A> Drop for Node<S, A> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node and its ancestors. See [`Node::ancestors`].
pub struct Ancestors<'a, S, A> {
    next: Option<&'a Node<S, A>>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a Node<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
