//! Smoothed Good-Toulmin estimator
//!
//! The classical Good-Toulmin estimator sums the alternating series
//! `sum_i -(-t)^(i+1) Phi[i]`. It is exact in expectation and well behaved
//! for `t <= 1`, but for `t > 1` the coefficients grow like `t^i` and the
//! estimate explodes. The smoothed variant truncates the series after a
//! Binomial(k, q) number of terms and averages over many such truncations,
//! which keeps the variance bounded as `t` grows.

use crate::truncation::TruncationPlan;
use tracing::{debug, instrument};
use unseen_core::series::{full_series, partial_sums};
use unseen_core::{Error, FrequencyHistogram, NewSpeciesEstimator, Result, TruncationSource};

/// Default number of truncation draws averaged per estimate
pub const DEFAULT_SMOOTHING_SAMPLES: usize = 1000;

/// Smoothed Good-Toulmin estimator of the number of new species
///
/// - `t <= 1`: the full series over the histogram, a single deterministic
///   term. The truncation source is not touched, which also keeps `t == 1`
///   away from the singular order formula.
/// - `t > 1`: the mean over `smoothing_samples` truncations whose lengths
///   are drawn from the injected [`TruncationSource`].
///
/// # Example
///
/// ```rust
/// use unseen_core::FrequencyHistogram;
/// use unseen_toulmin::{RngTruncationSource, SmoothedGoodToulmin};
///
/// let phi = FrequencyHistogram::from_counts(&[3u32, 2, 1]).unwrap();
/// let estimator = SmoothedGoodToulmin::new(500);
/// let mut source = RngTruncationSource::seeded(17);
///
/// let half = estimator.estimate(&phi, 9, 0.5, &mut source).unwrap();
/// assert!((half - 1.125).abs() < 1e-12);
///
/// let double = estimator.estimate(&phi, 9, 2.0, &mut source).unwrap();
/// assert!(double.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothedGoodToulmin {
    smoothing_samples: usize,
}

impl SmoothedGoodToulmin {
    /// Create an estimator averaging `smoothing_samples` truncations
    ///
    /// Zero is accepted here and only rejected when an extrapolation
    /// (`t > 1`) is requested.
    pub fn new(smoothing_samples: usize) -> Self {
        Self { smoothing_samples }
    }

    /// Set the number of smoothing samples
    pub fn with_smoothing_samples(mut self, smoothing_samples: usize) -> Self {
        self.smoothing_samples = smoothing_samples;
        self
    }

    /// Number of truncations averaged per extrapolation
    pub fn smoothing_samples(&self) -> usize {
        self.smoothing_samples
    }

    /// Expected number of new species when the sample of size `n` is scaled by `t`
    #[instrument(skip(self, histogram, source), fields(entries = histogram.len()))]
    pub fn estimate<S: TruncationSource + ?Sized>(
        &self,
        histogram: &FrequencyHistogram,
        n: u64,
        t: f64,
        source: &mut S,
    ) -> Result<f64> {
        Error::check_sample_size(n)?;
        Error::check_scale_factor(t)?;

        if t <= 1.0 {
            let value = full_series(histogram, t);
            debug!(value, "interpolation estimate");
            return Ok(value);
        }

        if self.smoothing_samples == 0 {
            return Err(Error::DegenerateSmoothingCount { t });
        }

        let plan = TruncationPlan::for_scale(n, t)?;
        let lengths = source.draw(plan.order, plan.probability, self.smoothing_samples)?;
        if lengths.len() != self.smoothing_samples {
            return Err(Error::Sampling(format!(
                "expected {} truncation lengths, got {}",
                self.smoothing_samples,
                lengths.len()
            )));
        }

        // Every truncation reads the same zero-extended view of the histogram
        let sums = partial_sums(histogram, t, plan.order as usize);
        let mut total = 0.0;
        for &length in &lengths {
            let sum = sums.get(length as usize).ok_or_else(|| {
                Error::Sampling(format!(
                    "truncation length {length} exceeds order {}",
                    plan.order
                ))
            })?;
            total += sum;
        }
        let value = total / lengths.len() as f64;

        debug!(
            order = plan.order,
            probability = plan.probability,
            mean_length = lengths.iter().sum::<u64>() as f64 / lengths.len() as f64,
            value,
            "smoothed extrapolation estimate"
        );

        Ok(value)
    }
}

impl Default for SmoothedGoodToulmin {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_SAMPLES)
    }
}

impl NewSpeciesEstimator for SmoothedGoodToulmin {
    fn estimate<S: TruncationSource + ?Sized>(
        &self,
        histogram: &FrequencyHistogram,
        sample_size: u64,
        t: f64,
        source: &mut S,
    ) -> Result<f64> {
        SmoothedGoodToulmin::estimate(self, histogram, sample_size, t, source)
    }

    fn name(&self) -> &str {
        "Smoothed Good-Toulmin"
    }
}

/// Estimate new species from a raw histogram slice
///
/// Validates `histogram` (finite, non-negative entries) and forwards to
/// [`SmoothedGoodToulmin::estimate`]. The caller's slice is only read.
pub fn smoothed_good_toulmin<S: TruncationSource + ?Sized>(
    histogram: &[f64],
    n: u64,
    t: f64,
    smoothing_samples: usize,
    source: &mut S,
) -> Result<f64> {
    Error::check_sample_size(n)?;
    Error::check_scale_factor(t)?;
    let histogram = FrequencyHistogram::new(histogram.to_vec())?;
    SmoothedGoodToulmin::new(smoothing_samples).estimate(&histogram, n, t, source)
}
