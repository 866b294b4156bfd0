//! Core traits for unseen species estimation
//!
//! The estimator never reaches for a global random generator. Randomness
//! enters through [`TruncationSource`], so callers decide how draws are
//! seeded and sequenced.

use crate::{FrequencyHistogram, Result};

/// Source of random truncation lengths
///
/// Implementations draw `count` independent samples from a
/// Binomial(`order`, `probability`) distribution. Every returned value is at
/// most `order`.
pub trait TruncationSource {
    /// Draw `count` truncation lengths from Binomial(`order`, `probability`)
    fn draw(&mut self, order: u64, probability: f64, count: usize) -> Result<Vec<u64>>;
}

impl<S: TruncationSource + ?Sized> TruncationSource for &mut S {
    fn draw(&mut self, order: u64, probability: f64, count: usize) -> Result<Vec<u64>> {
        (**self).draw(order, probability, count)
    }
}

/// Estimator of the number of new species under a `t`-fold rescaled sample
///
/// # Example
///
/// ```rust
/// use unseen_core::{FrequencyHistogram, NewSpeciesEstimator, Result, TruncationSource};
/// use unseen_core::series::full_series;
///
/// struct Classical;
///
/// impl NewSpeciesEstimator for Classical {
///     fn estimate<S: TruncationSource + ?Sized>(
///         &self,
///         histogram: &FrequencyHistogram,
///         _sample_size: u64,
///         t: f64,
///         _source: &mut S,
///     ) -> Result<f64> {
///         Ok(full_series(histogram, t))
///     }
///
///     fn name(&self) -> &str { "Good-Toulmin" }
/// }
/// ```
pub trait NewSpeciesEstimator {
    /// Expected number of species not in the original sample that appear
    /// when the sample of size `sample_size` is scaled by `t`
    fn estimate<S: TruncationSource + ?Sized>(
        &self,
        histogram: &FrequencyHistogram,
        sample_size: u64,
        t: f64,
        source: &mut S,
    ) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}
