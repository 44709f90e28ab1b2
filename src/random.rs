//! Random source construction.
//!
//! Every stochastic runner has a `run_with_rng` form that takes any
//! [`rand::Rng`]. The config-driven `run` forms build a [`StdRng`] here:
//! seeded when the config carries a seed, from fresh entropy otherwise.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional config seed.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
