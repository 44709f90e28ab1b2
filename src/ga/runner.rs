//! GA generational loop execution.
//!
//! [`GaRunner`] drives the whole process:
//! random population → evaluation → fitness-proportionate parent draws →
//! crossover → mutation → wholesale replacement → repeat.

use super::config::GaConfig;
use crate::error::SearchError;
use crate::node::{Node, NodeRef};
use crate::problem::GeneticProblem;
use crate::random::rng_for;
use crate::sampling::InverseTransformSampler;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a genetic search run.
#[derive(Debug, Clone)]
pub struct GaResult<S, A> {
    /// Fittest individual of the final population, wrapped in a root node.
    pub best: NodeRef<S, A>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each evaluated population: the initial one first,
    /// then one entry per generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the genetic search loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs genetic search, seeding the random source from `config.seed`.
    pub fn run<P: GeneticProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::State, P::Action>, SearchError> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs genetic search with the given random source.
    ///
    /// Replacement is fully generational: no individual survives into the
    /// next generation unchanged, so the best fitness may drop between
    /// generations.
    pub fn run_with_rng<P, R>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::State, P::Action>, SearchError>
    where
        P: GeneticProblem,
        R: Rng,
    {
        config.validate()?;
        debug!(
            population_size = config.population_size,
            limit = config.limit,
            pmut = config.pmut,
            "starting genetic search"
        );

        // 1. Initialize population
        let mut population: Vec<P::State> = (0..config.population_size)
            .map(|_| problem.generate_random_state(rng))
            .collect();
        let mut fitness_history = Vec::with_capacity(config.limit + 1);

        // 2. Generational loop
        for gen in 0..config.limit {
            let fitness = evaluate(problem, &population);
            fitness_history.push(fitness[find_best(&fitness)]);

            let sampler = InverseTransformSampler::new(&fitness, &population);
            if sampler.is_uniform() {
                trace!(gen, "no positive fitness, sampling uniformly");
            }

            let next_gen: Vec<P::State> = (0..config.population_size)
                .map(|_| {
                    let a = sampler.sample(rng);
                    let b = sampler.sample(rng);
                    let child = problem.crossover(a, b, rng);
                    if rng.random_bool(config.pmut) {
                        problem.mutate(&child, rng)
                    } else {
                        child
                    }
                })
                .collect();

            trace!(gen, best = fitness_history[gen], "generation finished");
            population = next_gen;
        }

        // 3. Pick the fittest of the final population
        let fitness = evaluate(problem, &population);
        let best_idx = find_best(&fitness);
        let best_fitness = fitness[best_idx];
        fitness_history.push(best_fitness);

        debug!(
            generations = config.limit,
            best_fitness, "genetic search finished"
        );

        Ok(GaResult {
            best: Node::root(population.swap_remove(best_idx)),
            best_fitness,
            generations: config.limit,
            fitness_history,
        })
    }
}

/// Genetic search with population size `population_size`, `limit`
/// generations and mutation probability `pmut`.
pub fn genetic_search<P, R>(
    problem: &P,
    population_size: usize,
    limit: usize,
    pmut: f64,
    rng: &mut R,
) -> Result<GaResult<P::State, P::Action>, SearchError>
where
    P: GeneticProblem,
    R: Rng,
{
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_limit(limit)
        .with_pmut(pmut);
    GaRunner::run_with_rng(problem, &config, rng)
}

fn evaluate<P: GeneticProblem>(problem: &P, population: &[P::State]) -> Vec<f64> {
    population.iter().map(|s| problem.value(s)).collect()
}

/// Index of the highest fitness; the first one wins ties.
fn find_best(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Problem, RandomStateProblem, ValueProblem};
    use crate::random::create_rng;
    use crate::testing::{init_tracing, OneMax};
    use std::cell::Cell;

    // ---- Flat problem: every state scores zero ----

    #[derive(Default)]
    struct Flat {
        crossovers: Cell<usize>,
        mutations: Cell<usize>,
    }

    impl Problem for Flat {
        type State = u32;
        type Action = ();

        fn initial_state(&self) -> u32 {
            0
        }
    }

    impl ValueProblem for Flat {
        fn value(&self, _state: &u32) -> f64 {
            0.0
        }
    }

    impl RandomStateProblem for Flat {
        fn generate_random_state<R: Rng>(&self, rng: &mut R) -> u32 {
            rng.random_range(0..1000)
        }
    }

    impl GeneticProblem for Flat {
        fn crossover<R: Rng>(&self, a: &u32, b: &u32, _rng: &mut R) -> u32 {
            self.crossovers.set(self.crossovers.get() + 1);
            a.max(b) - a.min(b)
        }

        fn mutate<R: Rng>(&self, state: &u32, _rng: &mut R) -> u32 {
            self.mutations.set(self.mutations.get() + 1);
            state + 1
        }
    }

    #[test]
    fn test_onemax_beats_random_strings() {
        init_tracing();
        let problem = OneMax { bits: 20 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_limit(100)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        // A random 20-bit string has 10 set bits on average.
        assert!(
            result.best_fitness >= 14.0,
            "expected fitness >= 14 for 20-bit OneMax, got {}",
            result.best_fitness
        );
        assert_eq!(result.best_fitness, problem.value(result.best.state()));
    }

    #[test]
    fn test_single_individual_self_crossover() {
        let problem = OneMax { bits: 16 };
        let config = GaConfig::default()
            .with_population_size(1)
            .with_limit(25)
            .with_pmut(0.0);

        // One-point crossover of a string with itself reproduces it.
        let initial = problem.generate_random_state(&mut create_rng(11));
        let result = GaRunner::run_with_rng(&problem, &config, &mut create_rng(11)).unwrap();

        assert_eq!(*result.best.state(), initial);
        assert!(result.best.parent().is_none());
        assert_eq!(result.best.depth(), 0);
    }

    #[test]
    fn test_all_zero_fitness_samples_uniformly() {
        let problem = Flat::default();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_limit(20)
            .with_pmut(0.0)
            .with_seed(3);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(problem.crossovers.get(), 200);
        assert_eq!(problem.mutations.get(), 0);
    }

    #[test]
    fn test_pmut_one_mutates_every_child() {
        let problem = Flat::default();
        let config = GaConfig::default()
            .with_population_size(8)
            .with_limit(5)
            .with_pmut(1.0)
            .with_seed(3);

        GaRunner::run(&problem, &config).unwrap();
        assert_eq!(problem.mutations.get(), 40);
    }

    #[test]
    fn test_invalid_pmut_rejected_before_callbacks() {
        let problem = Flat::default();
        let config = GaConfig::default().with_pmut(1.5);

        assert!(GaRunner::run(&problem, &config).is_err());
        assert_eq!(problem.crossovers.get(), 0);
    }

    #[test]
    fn test_fitness_history() {
        let problem = OneMax { bits: 10 };
        let result = genetic_search(&problem, 20, 30, 0.1, &mut create_rng(42)).unwrap();

        assert_eq!(result.generations, 30);
        // Initial population plus one entry per generation.
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(result.fitness_history.last(), Some(&result.best_fitness));
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = OneMax { bits: 12 };
        let mut rng = create_rng(5);
        let initial: Vec<Vec<bool>> = (0..6)
            .map(|_| problem.generate_random_state(&mut rng))
            .collect();
        let expected = initial
            .iter()
            .map(|s| problem.value(s))
            .fold(f64::NEG_INFINITY, f64::max);

        let result = genetic_search(&problem, 6, 0, 0.1, &mut create_rng(5)).unwrap();
        assert_eq!(result.best_fitness, expected);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_find_best_first_wins_ties() {
        assert_eq!(find_best(&[1.0, 3.0, 2.0, 3.0]), 1);
        assert_eq!(find_best(&[0.0]), 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMax { bits: 10 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_limit(10)
            .with_seed(9);
        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.best.state(), b.best.state());
        assert_eq!(a.fitness_history, b.fitness_history);
    }
}
