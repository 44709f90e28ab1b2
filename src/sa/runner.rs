//! SA execution loop.

use super::config::{SaConfig, TemperatureSchedule};
use crate::error::SearchError;
use crate::node::{Node, NodeRef};
use crate::problem::{SearchProblem, ValueProblem};
use crate::random::rng_for;
use rand::Rng;
use tracing::{debug, trace};

/// Why an annealing walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaTermination {
    /// The schedule reached zero temperature.
    Frozen,
    /// The current state has no neighbors.
    NoNeighbors,
    /// `max_steps` was reached.
    StepLimit,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S, A> {
    /// The node the walk ended on.
    pub node: NodeRef<S, A>,

    /// Value of `node`.
    pub value: f64,

    /// Time steps that drew a neighbor.
    pub steps: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature at the step the walk stopped (0 when frozen).
    pub final_temperature: f64,

    pub termination: SaTermination,
}

/// Executes the Simulated Annealing walk.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, seeding the random source from `config.seed`.
    pub fn run<P, T>(
        problem: &P,
        config: &SaConfig<T>,
    ) -> Result<SaResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem,
        T: TemperatureSchedule,
    {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA with the given random source.
    ///
    /// At each step `t`, stops if `schedule(t) <= 0`; otherwise picks a
    /// uniformly random neighbor of the current node and moves to it if it
    /// is better, or else with probability `exp(delta / T)` (Metropolis
    /// criterion). Returns the node the walk ends on, which is not
    /// necessarily the best node visited.
    pub fn run_with_rng<P, T, R>(
        problem: &P,
        config: &SaConfig<T>,
        rng: &mut R,
    ) -> Result<SaResult<P::State, P::Action>, SearchError>
    where
        P: SearchProblem + ValueProblem,
        T: TemperatureSchedule,
        R: Rng,
    {
        config.validate()?;
        debug!(max_steps = config.max_steps, "starting simulated annealing");

        let mut current = Node::root(problem.initial_state());
        let mut current_value = problem.value(current.state());

        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let (termination, final_temperature) = loop {
            if config.max_steps > 0 && steps >= config.max_steps {
                break (SaTermination::StepLimit, config.schedule.temperature(steps));
            }

            let temperature = config.schedule.temperature(steps);
            if temperature <= 0.0 {
                break (SaTermination::Frozen, temperature);
            }

            let mut neighbors = current.expand(problem);
            if neighbors.is_empty() {
                break (SaTermination::NoNeighbors, temperature);
            }
            let candidate = neighbors.swap_remove(rng.random_range(0..neighbors.len()));
            let candidate_value = problem.value(candidate.state());
            let delta = candidate_value - current_value;

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (delta / temperature).exp()
            };

            if accept {
                current = candidate;
                current_value = candidate_value;
                accepted_moves += 1;
            }

            trace!(step = steps, temperature, delta, accept, "annealing step");
            steps += 1;
        };

        debug!(
            steps,
            accepted_moves,
            value = current_value,
            ?termination,
            "simulated annealing finished"
        );

        Ok(SaResult {
            node: current,
            value: current_value,
            steps,
            accepted_moves,
            improving_moves,
            final_temperature,
            termination,
        })
    }
}

/// Simulated Annealing with the given schedule (any
/// [`TemperatureSchedule`], closures included), or the default
/// [`ExpSchedule`](super::ExpSchedule) when `schedule` is `None`.
///
/// A bare `None` needs its type spelled out, e.g. `None::<ExpSchedule>`.
pub fn simulated_annealing<P, T, R>(
    problem: &P,
    schedule: Option<T>,
    rng: &mut R,
) -> Result<SaResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem,
    T: TemperatureSchedule,
    R: Rng,
{
    match schedule {
        Some(schedule) => {
            let config = SaConfig::default().with_schedule(schedule);
            SaRunner::run_with_rng(problem, &config, rng)
        }
        None => SaRunner::run_with_rng(problem, &SaConfig::default(), rng),
    }
}
