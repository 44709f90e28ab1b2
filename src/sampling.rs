//! Fitness-proportionate sampling.
//!
//! [`InverseTransformSampler`] draws items with probability proportional
//! to their weight by locating a uniform draw in the cumulative weight
//! table (binary search, `O(log n)` per draw).
//!
//! # Degenerate weights
//!
//! Negative and NaN weights count as zero. When every weight is zero the
//! sampler falls back to uniform sampling, so it never divides by a zero
//! total and never loops.

use rand::Rng;

/// Weighted sampler over a borrowed population.
#[derive(Debug, Clone)]
pub struct InverseTransformSampler<'a, T> {
    items: &'a [T],
    cumulative: Vec<f64>,
    total: f64,
}

impl<'a, T> InverseTransformSampler<'a, T> {
    /// Builds a sampler over `items` with parallel `weights`.
    ///
    /// # Panics
    /// Panics if `items` is empty or the slices differ in length.
    pub fn new(weights: &[f64], items: &'a [T]) -> Self {
        assert!(!items.is_empty(), "cannot sample from an empty population");
        assert_eq!(
            weights.len(),
            items.len(),
            "weights and items must have the same length"
        );

        let mut total = 0.0;
        let cumulative = weights
            .iter()
            .map(|&w| {
                if w > 0.0 && w.is_finite() {
                    total += w;
                }
                total
            })
            .collect();

        Self {
            items,
            cumulative,
            total,
        }
    }

    /// Whether draws are uniform because no item carries positive weight.
    pub fn is_uniform(&self) -> bool {
        self.total <= 0.0 || !self.total.is_finite()
    }

    /// Index of one weighted draw.
    pub fn sample_index<R: Rng>(&self, rng: &mut R) -> usize {
        if self.is_uniform() {
            return rng.random_range(0..self.items.len());
        }
        let threshold = rng.random_range(0.0..self.total);
        // First index whose cumulative weight exceeds the threshold; zero
        // weights never qualify because they repeat the previous total.
        self.cumulative
            .partition_point(|&c| c <= threshold)
            .min(self.items.len() - 1)
    }

    /// One weighted draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &'a T {
        &self.items[self.sample_index(rng)]
    }
}
