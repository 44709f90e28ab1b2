//! Local search configuration.

use crate::error::SearchError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the local search engine.
///
/// # Examples
///
/// ```
/// use u_search::local::LocalConfig;
///
/// // Beam of 20 nodes, at most 500 iterations.
/// let config = LocalConfig::default()
///     .with_fringe_size(20)
///     .with_iterations_limit(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalConfig {
    /// Number of nodes kept in the fringe (the beam width).
    ///
    /// 1 gives hill climbing; 0 keeps every node (unbounded fringe).
    pub fringe_size: usize,

    /// Maximum number of iterations. 0 = stop only at a local optimum.
    pub iterations_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// Only the stochastic expander draws random numbers.
    pub seed: Option<u64>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            fringe_size: 1,
            iterations_limit: 0,
            seed: None,
        }
    }
}

impl LocalConfig {
    pub fn with_fringe_size(mut self, n: usize) -> Self {
        self.fringe_size = n;
        self
    }

    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Every field value is usable, so this always succeeds; it is kept so
    /// all strategy configs validate the same way.
    pub fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }
}
