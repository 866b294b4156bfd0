//! Randomized truncation of the Good-Toulmin series
//!
//! For `t > 1` the series is cut after a random number of terms `L`, drawn
//! from Binomial(k, q) with
//!
//! ```text
//! k = ceil( 0.5 * log_3( n * t^2 / (t - 1) ) )
//! q = 2 / (t + 2)
//! ```
//!
//! (Orlitsky, Suresh & Wu, arXiv:1511.07428.)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, Distribution};
use unseen_core::{Error, Result, TruncationSource};

/// Parameters of the truncation distribution for one `(n, t)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationPlan {
    /// Maximum number of series terms (`k`)
    pub order: u64,
    /// Success probability of each term being kept (`q`)
    pub probability: f64,
}

impl TruncationPlan {
    /// Compute the plan for sample size `n` and scale factor `t > 1`
    ///
    /// `t <= 1` is rejected: the order formula is singular at `t == 1` and
    /// interpolation needs no truncation.
    ///
    /// ```
    /// use unseen_toulmin::TruncationPlan;
    ///
    /// let plan = TruncationPlan::for_scale(1000, 2.0).unwrap();
    /// // log_3(1000 * 4 / 1) ~= 7.55
    /// assert_eq!(plan.order, 4);
    /// assert!((plan.probability - 0.5).abs() < 1e-12);
    /// ```
    pub fn for_scale(n: u64, t: f64) -> Result<Self> {
        Error::check_sample_size(n)?;
        Error::check_scale_factor(t)?;
        if t <= 1.0 {
            return Err(Error::InvalidScaleFactor {
                t,
                reason: "truncation is only defined for extrapolation (t > 1)",
            });
        }

        let ratio = n as f64 * t * t / (t - 1.0);
        let order = (0.5 * ratio.ln() / 3f64.ln()).ceil();
        if !order.is_finite() {
            return Err(Error::InvalidScaleFactor {
                t,
                reason: "truncation order overflows",
            });
        }

        Ok(Self {
            // n * t^2 / (t - 1) >= 4 for n >= 1, so the order is at least 1
            order: order.max(0.0) as u64,
            probability: 2.0 / (t + 2.0),
        })
    }

    /// Mean truncation length `k * q`
    pub fn expected_length(&self) -> f64 {
        self.order as f64 * self.probability
    }
}

/// Truncation source backed by a [`rand::Rng`]
///
/// Each call draws fresh samples from the wrapped generator, so a seeded
/// generator yields a reproducible sequence of estimates.
#[derive(Debug, Clone)]
pub struct RngTruncationSource<R> {
    rng: R,
}

impl<R: Rng> RngTruncationSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngTruncationSource<StdRng> {
    /// Reproducible source seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TruncationSource for RngTruncationSource<R> {
    fn draw(&mut self, order: u64, probability: f64, count: usize) -> Result<Vec<u64>> {
        let binomial =
            Binomial::new(order, probability).map_err(|e| Error::Sampling(e.to_string()))?;
        Ok((0..count).map(|_| binomial.sample(&mut self.rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plan_formula() {
        // n * t^2 / (t - 1) = 9 * 9 / 2 = 40.5; 0.5 * log_3(40.5) ~= 1.68
        let plan = TruncationPlan::for_scale(9, 3.0).unwrap();
        assert_eq!(plan.order, 2);
        assert_relative_eq!(plan.probability, 0.4);
        assert_relative_eq!(plan.expected_length(), 0.8);
    }

    #[test]
    fn test_plan_mild_extrapolation() {
        // 81 * 1.5^2 / 0.5 = 364.5; 0.5 * log_3(364.5) ~= 2.68
        let plan = TruncationPlan::for_scale(81, 1.5).unwrap();
        assert_eq!(plan.order, 3);
        assert_relative_eq!(plan.probability, 2.0 / 3.5);
    }

    #[test]
    fn test_plan_order_grows_near_one() {
        let far = TruncationPlan::for_scale(100, 5.0).unwrap();
        let near = TruncationPlan::for_scale(100, 1.0001).unwrap();
        assert!(near.order > far.order);
    }

    #[test]
    fn test_plan_rejects_interpolation_regime() {
        for t in [1.0, 0.5, 0.0, -2.0] {
            assert!(matches!(
                TruncationPlan::for_scale(10, t),
                Err(Error::InvalidScaleFactor { .. })
            ));
        }
        assert!(matches!(
            TruncationPlan::for_scale(0, 2.0),
            Err(Error::InvalidSampleSize { n: 0 })
        ));
    }

    #[test]
    fn test_rng_source_respects_order() {
        let mut source = RngTruncationSource::seeded(7);
        let draws = source.draw(5, 0.4, 500).unwrap();
        assert_eq!(draws.len(), 500);
        assert!(draws.iter().all(|&l| l <= 5));
    }

    #[test]
    fn test_rng_source_reproducible() {
        let a = RngTruncationSource::seeded(42).draw(10, 0.3, 64).unwrap();
        let b = RngTruncationSource::seeded(42).draw(10, 0.3, 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_source_rejects_bad_probability() {
        let mut source = RngTruncationSource::seeded(1);
        assert!(matches!(
            source.draw(3, 1.5, 2),
            Err(Error::Sampling(_))
        ));
    }

    #[test]
    fn test_rng_source_mean() {
        let mut source = RngTruncationSource::seeded(2024);
        let draws = source.draw(20, 0.25, 20_000).unwrap();
        let mean = draws.iter().sum::<u64>() as f64 / draws.len() as f64;
        assert!((mean - 5.0).abs() < 0.1, "mean {mean} should be close to k*q = 5");
    }
}
