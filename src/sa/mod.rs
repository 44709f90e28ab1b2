//! Simulated Annealing (SA).
//!
//! A random walk over a problem's neighborhood that always takes
//! improving moves and takes worsening moves with probability
//! `exp(delta / T)`, where the temperature `T` follows a
//! [`TemperatureSchedule`] and the walk stops once it reaches zero.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::{ExpSchedule, SaConfig, TemperatureSchedule};
pub use runner::{simulated_annealing, SaResult, SaRunner, SaTermination};
