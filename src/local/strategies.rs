//! Beam search and hill climbing entry points.

use super::config::LocalConfig;
use super::expander::Expander;
use super::runner::{LocalResult, LocalRunner};
use crate::error::SearchError;
use crate::problem::{RandomStateProblem, SearchProblem, ValueProblem};
use rand::Rng;

/// Default beam width of the beam search entry points.
pub const DEFAULT_BEAM_SIZE: usize = 100;

/// Beam search: every iteration expands the whole beam and keeps the
/// `beam_size` best nodes (0 keeps all of them). `iterations_limit` of 0 =
/// run to stagnation.
pub fn beam_search<P>(
    problem: &P,
    beam_size: usize,
    iterations_limit: usize,
) -> Result<LocalResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem,
{
    let config = LocalConfig::default()
        .with_fringe_size(beam_size)
        .with_iterations_limit(iterations_limit);
    LocalRunner::run(problem, Expander::All, &config)
}

/// Best-first beam search: every iteration expands only the best node.
pub fn beam_search_best_first<P>(
    problem: &P,
    beam_size: usize,
    iterations_limit: usize,
) -> Result<LocalResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem,
{
    let config = LocalConfig::default()
        .with_fringe_size(beam_size)
        .with_iterations_limit(iterations_limit);
    LocalRunner::run(problem, Expander::First, &config)
}

/// Steepest-ascent hill climbing.
pub fn hill_climbing<P>(
    problem: &P,
    iterations_limit: usize,
) -> Result<LocalResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem,
{
    let config = LocalConfig::default().with_iterations_limit(iterations_limit);
    LocalRunner::run(problem, Expander::First, &config)
}

/// Stochastic hill climbing: moves to a random strictly better neighbor.
pub fn hill_climbing_stochastic<P, R>(
    problem: &P,
    iterations_limit: usize,
    rng: &mut R,
) -> Result<LocalResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem,
    R: Rng,
{
    let config = LocalConfig::default().with_iterations_limit(iterations_limit);
    LocalRunner::run_with_rng(problem, Expander::RandomBest, &config, rng)
}

/// Hill climbing repeated from `restarts_limit` random states; returns the
/// best run.
pub fn hill_climbing_random_restarts<P, R>(
    problem: &P,
    restarts_limit: usize,
    iterations_limit: usize,
    rng: &mut R,
) -> Result<LocalResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ValueProblem + RandomStateProblem,
    R: Rng,
{
    let config = LocalConfig::default().with_iterations_limit(iterations_limit);
    LocalRunner::run_restarts(problem, restarts_limit, &config, rng)
}
