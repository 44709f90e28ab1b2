//! Local search: beam search and hill climbing.
//!
//! A bounded, value-ordered fringe is grown each iteration by an
//! [`Expander`] and trimmed back to its best `fringe_size` nodes. The run
//! stops at a local optimum (the best value did not strictly improve) or
//! at the iteration limit.
//!
//! | Entry point | Expander | Fringe size |
//! |---|---|---|
//! | [`beam_search`] | `All` | beam size |
//! | [`beam_search_best_first`] | `First` | beam size |
//! | [`hill_climbing`] | `First` | 1 |
//! | [`hill_climbing_stochastic`] | `RandomBest` | 1 |
//! | [`hill_climbing_random_restarts`] | `First`, repeated | 1 |
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4
//! - Lowerre (1976), "The HARPY Speech Recognition System" (beam search)

mod config;
mod expander;
mod runner;
mod strategies;

pub use config::LocalConfig;
pub use expander::Expander;
pub use runner::{LocalResult, LocalRunner};
pub use strategies::{
    beam_search, beam_search_best_first, hill_climbing, hill_climbing_random_restarts,
    hill_climbing_stochastic, DEFAULT_BEAM_SIZE,
};
