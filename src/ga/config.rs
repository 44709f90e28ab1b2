//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::SearchError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for genetic search.
///
/// # Defaults
///
/// ```
/// use u_search::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.limit, 1000);
/// assert_eq!(config.pmut, 0.1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_search::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_limit(50)
///     .with_pmut(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations. 0 returns the best of the initial population.
    pub limit: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub pmut: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            limit: 1000,
            pmut: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_limit(mut self, n: usize) -> Self {
        self.limit = n;
        self
    }

    /// Sets the mutation probability. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_pmut(mut self, pmut: f64) -> Self {
        self.pmut = pmut;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.population_size == 0 {
            return Err(SearchError::invalid("population_size", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.pmut) {
            return Err(SearchError::invalid(
                "pmut",
                format!("must be within [0, 1], got {}", self.pmut),
            ));
        }
        Ok(())
    }
}
