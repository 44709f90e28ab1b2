//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. Seed a value-ordered fringe of size `fringe_size` with the start node
//! 2. Record the best node, apply the [`Expander`], take the new best
//! 3. Stop when `iterations_limit` is reached, or when the new best is no
//!    better than the previous one (ties count as stagnation)
//! 4. Return the best node

use super::config::LocalConfig;
use super::expander::Expander;
use crate::error::SearchError;
use crate::fringe::{BoundedPriorityQueue, Fringe};
use crate::node::{Node, NodeOrdering, NodeRef, ValueOrdered};
use crate::problem::{RandomStateProblem, SearchProblem, ValueProblem};
use crate::random::rng_for;
use rand::Rng;
use std::cmp::Ordering;
use std::rc::Rc;
use tracing::{debug, trace};

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalResult<S, A> {
    /// Best node found.
    pub best: NodeRef<S, A>,

    /// Value of the best node.
    pub best_value: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Whether the run stopped at a local optimum rather than the
    /// iteration limit.
    pub stagnated: bool,

    /// Best value after each iteration.
    pub value_history: Vec<f64>,
}

/// Executes the local search loop.
pub struct LocalRunner;

impl LocalRunner {
    /// Runs local search from the problem's initial state, seeding the
    /// random source from `config.seed`.
    pub fn run<P>(
        problem: &P,
        expander: Expander,
        config: &LocalConfig,
    ) -> Result<LocalResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem,
    {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(problem, expander, config, &mut rng)
    }

    /// Runs local search from the problem's initial state.
    pub fn run_with_rng<P, R>(
        problem: &P,
        expander: Expander,
        config: &LocalConfig,
        rng: &mut R,
    ) -> Result<LocalResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem,
        R: Rng,
    {
        Self::run_from(problem, problem.initial_state(), expander, config, rng)
    }

    /// Runs local search from `initial`.
    pub fn run_from<P, R>(
        problem: &P,
        initial: P::State,
        expander: Expander,
        config: &LocalConfig,
        rng: &mut R,
    ) -> Result<LocalResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem,
        R: Rng,
    {
        config.validate()?;
        Ok(Self::climb(problem, initial, expander, config, rng))
    }

    /// Runs best-first local search `restarts_limit` times, each from a
    /// fresh random state, and keeps the run with the highest best value.
    ///
    /// With the default `fringe_size` of 1 each run is standard hill
    /// climbing. On equal values the earliest run wins.
    pub fn run_restarts<P, R>(
        problem: &P,
        restarts_limit: usize,
        config: &LocalConfig,
        rng: &mut R,
    ) -> Result<LocalResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem + RandomStateProblem,
        R: Rng,
    {
        config.validate()?;
        if restarts_limit == 0 {
            return Err(SearchError::invalid("restarts_limit", "must be at least 1"));
        }

        let mut best: Option<LocalResult<P::State, P::Action>> = None;
        for restart in 0..restarts_limit {
            let initial = problem.generate_random_state(rng);
            let run = Self::climb(problem, initial, Expander::First, config, rng);
            trace!(restart, value = run.best_value, "restart finished");
            if best.as_ref().is_none_or(|b| b.best_value < run.best_value) {
                best = Some(run);
            }
        }

        let best = best.ok_or_else(|| SearchError::invalid("restarts_limit", "no run executed"))?;
        debug!(restarts_limit, best_value = best.best_value, "random restarts finished");
        Ok(best)
    }

    fn climb<P, R>(
        problem: &P,
        initial: P::State,
        expander: Expander,
        config: &LocalConfig,
        rng: &mut R,
    ) -> LocalResult<P::State, P::Action>
    where
        P: SearchProblem + ValueProblem,
        R: Rng,
    {
        debug!(
            ?expander,
            fringe_size = config.fringe_size,
            iterations_limit = config.iterations_limit,
            "starting local search"
        );

        let mut fringe = BoundedPriorityQueue::bounded(
            config.fringe_size,
            |node: &NodeRef<P::State, P::Action>| ValueOrdered.key(problem, node),
        );
        let root = Node::root(initial);
        let mut best_value = problem.value(root.state());
        let mut best = Rc::clone(&root);
        fringe.push(root);

        let mut iterations = 0usize;
        let mut stagnated = false;
        let mut value_history = Vec::new();

        loop {
            let old_value = best_value;
            expander.apply(&mut fringe, problem, rng);
            iterations += 1;

            if let Some(front) = fringe.peek() {
                best = Rc::clone(front);
                best_value = problem.value(best.state());
            }
            value_history.push(best_value);
            trace!(iterations, best_value, fringe = fringe.len(), "local search step");

            if config.iterations_limit > 0 && iterations >= config.iterations_limit {
                break;
            }
            // Ties and NaN both count as no improvement.
            if best_value.partial_cmp(&old_value) != Some(Ordering::Greater) {
                stagnated = true;
                break;
            }
        }

        debug!(iterations, best_value, stagnated, "local search finished");
        LocalResult {
            best,
            best_value,
            iterations,
            stagnated,
            value_history,
        }
    }
}
