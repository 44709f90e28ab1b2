//! Capability traits that connect a concrete problem to the search engine.
//!
//! Each strategy family asks only for what it uses:
//!
//! - [`SearchProblem`]: successor generation and goal test (BFS, DFS,
//!   uniform-cost, depth-limited, iterative deepening)
//! - [`HeuristicProblem`]: adds a distance-to-goal estimate (greedy, A*)
//! - [`ValueProblem`]: a quality score, higher is better (beam search, hill
//!   climbing, simulated annealing, genetic search)
//! - [`RandomStateProblem`]: random state generation (random restarts,
//!   genetic search)
//! - [`GeneticProblem`]: recombination and mutation (genetic search)
//!
//! Callbacks are infallible. A panic inside one propagates to the caller
//! unchanged; the engine does not retry.

use rand::Rng;
use std::hash::Hash;

/// The base of every problem: its state and action types and where the
/// search starts.
pub trait Problem {
    /// A point in the state space.
    ///
    /// `Eq + Hash` lets graph search keep a visited set.
    type State: Clone + Eq + Hash;

    /// An operator leading from one state to another.
    type Action: Clone;

    /// The state every node-based search starts from.
    fn initial_state(&self) -> Self::State;
}

/// A problem whose state space can be walked action by action.
///
/// # Examples
///
/// ```
/// use u_search::problem::{Problem, SearchProblem};
///
/// /// Count from 0 up to a target in steps of 1 or 2.
/// struct Counter { target: u32 }
///
/// impl Problem for Counter {
///     type State = u32;
///     type Action = u32;
///     fn initial_state(&self) -> u32 { 0 }
/// }
///
/// impl SearchProblem for Counter {
///     fn actions(&self, state: &u32) -> Vec<u32> {
///         [1, 2].into_iter().filter(|s| state + s <= self.target).collect()
///     }
///     fn result(&self, state: &u32, action: &u32) -> u32 { state + action }
///     fn is_goal(&self, state: &u32) -> bool { *state == self.target }
/// }
/// ```
pub trait SearchProblem: Problem {
    /// Actions applicable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Step cost of moving from `from` to `to` via `action`.
    ///
    /// Defaults to 1, making path cost equal to depth.
    fn cost(&self, _from: &Self::State, _action: &Self::Action, _to: &Self::State) -> f64 {
        1.0
    }

    /// Whether `state` satisfies the goal.
    ///
    /// Local strategies never call this; the default reports no goal.
    fn is_goal(&self, _state: &Self::State) -> bool {
        false
    }
}

/// A search problem with an estimate of the remaining cost to a goal.
///
/// A* returns an optimal solution when the estimate is admissible (never
/// overestimates) and consistent.
pub trait HeuristicProblem: SearchProblem {
    fn heuristic(&self, state: &Self::State) -> f64;
}

/// A problem whose states can be scored. Higher values are better.
pub trait ValueProblem: Problem {
    fn value(&self, state: &Self::State) -> f64;
}

/// A problem that can draw independent random states.
pub trait RandomStateProblem: Problem {
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> Self::State;
}

/// The operators genetic search needs on top of scoring and random states.
///
/// Fitness is [`ValueProblem::value`]; it should be non-negative, since the
/// parent sampler treats negative fitness as zero weight.
pub trait GeneticProblem: ValueProblem + RandomStateProblem {
    /// Combines two parents into one child.
    fn crossover<R: Rng>(&self, a: &Self::State, b: &Self::State, rng: &mut R) -> Self::State;

    /// Returns a perturbed copy of `state`.
    fn mutate<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;
}
