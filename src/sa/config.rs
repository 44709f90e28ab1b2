//! SA configuration and temperature schedules.

use crate::error::SearchError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps a time step to a temperature.
///
/// The walk stops at the first step whose temperature is zero (or
/// negative), so a schedule should reach zero eventually. Any
/// `Fn(usize) -> f64` closure is a schedule.
pub trait TemperatureSchedule {
    fn temperature(&self, step: usize) -> f64;

    /// Checks the schedule's parameters before a run.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }
}

impl<F> TemperatureSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, step: usize) -> f64 {
        self(step)
    }
}

/// Exponential decay cut off at `limit`:
/// `T(t) = k * exp(-lambda * t)` for `t < limit`, `0` afterwards.
///
/// # Examples
///
/// ```
/// use u_search::sa::{ExpSchedule, TemperatureSchedule};
///
/// let schedule = ExpSchedule::default();
/// assert_eq!(schedule.temperature(0), 20.0);
/// assert_eq!(schedule.temperature(100), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpSchedule {
    /// Initial temperature.
    pub k: f64,

    /// Decay rate per step.
    pub lambda: f64,

    /// First step with zero temperature.
    pub limit: usize,
}

impl Default for ExpSchedule {
    fn default() -> Self {
        Self {
            k: 20.0,
            lambda: 0.005,
            limit: 100,
        }
    }
}

impl ExpSchedule {
    pub fn new(k: f64, lambda: f64, limit: usize) -> Self {
        Self { k, lambda, limit }
    }
}

impl TemperatureSchedule for ExpSchedule {
    fn temperature(&self, step: usize) -> f64 {
        if step < self.limit {
            self.k * (-self.lambda * step as f64).exp()
        } else {
            0.0
        }
    }

    fn validate(&self) -> Result<(), SearchError> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(SearchError::invalid(
                "k",
                format!("must be positive and finite, got {}", self.k),
            ));
        }
        if !(self.lambda.is_finite() && self.lambda >= 0.0) {
            return Err(SearchError::invalid(
                "lambda",
                format!("must be non-negative and finite, got {}", self.lambda),
            ));
        }
        Ok(())
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_search::sa::{ExpSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_schedule(ExpSchedule::new(50.0, 0.01, 1_000))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// // Any closure works as a schedule.
/// let linear = SaConfig::default().with_schedule(|t: usize| (10.0 - t as f64).max(0.0));
/// assert!(linear.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig<T = ExpSchedule> {
    /// Temperature schedule.
    pub schedule: T,

    /// Hard cap on time steps, for schedules that may never reach zero.
    /// 0 = no cap.
    pub max_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            schedule: ExpSchedule::default(),
            max_steps: 0,
            seed: None,
        }
    }
}

impl<T: TemperatureSchedule> SaConfig<T> {
    /// Replaces the temperature schedule.
    pub fn with_schedule<U: TemperatureSchedule>(self, schedule: U) -> SaConfig<U> {
        SaConfig {
            schedule,
            max_steps: self.max_steps,
            seed: self.seed,
        }
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.schedule.validate()
    }
}
