//! Genetic search.
//!
//! A population of raw problem states evolves for a fixed number of
//! generations. Parents are drawn by fitness-proportionate sampling
//! ([`InverseTransformSampler`](crate::sampling::InverseTransformSampler)),
//! combined with [`GeneticProblem::crossover`](crate::problem::GeneticProblem::crossover)
//! and mutated with probability `pmut`. Each generation replaces the
//! previous one wholesale. The fittest individual of the final population
//! is returned wrapped in a root [`Node`](crate::node::Node).
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{genetic_search, GaResult, GaRunner};
