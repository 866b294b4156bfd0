//! Species accumulation curves
//!
//! A curve pairs each scale factor `t` on a [`ScaleGrid`] with the expected
//! number of distinct species in a sample `t` times the original size:
//!
//! ```text
//! count(0) = sum_i Phi[i]
//! count(t) = count(0) + U(t)        for t > 0
//! ```
//!
//! where `U` is any [`NewSpeciesEstimator`]. The `t = 0` point is a grid-level
//! rule and never reaches the estimator.

use crate::{Result, ScaleGrid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use unseen_core::{FrequencyHistogram, NewSpeciesEstimator, TruncationSource};

/// One point of an accumulation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Scale factor `t`
    pub scale: f64,
    /// Expected number of distinct species at scale `t`
    #[serde(rename = "expected_species")]
    pub species: f64,
}

/// Expected species counts over a grid of scale factors
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationCurve {
    points: Vec<CurvePoint>,
    base_count: f64,
}

impl AccumulationCurve {
    /// Create a curve from precomputed points
    pub fn new(points: Vec<CurvePoint>, base_count: f64) -> Self {
        Self { points, base_count }
    }

    /// The points in grid order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Species observed in the original sample (the `t = 0` value)
    pub fn base_count(&self) -> f64 {
        self.base_count
    }

    /// The point with the largest scale factor
    pub fn final_point(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Expected new species per point: `(t, count(t) - count(0))`
    pub fn new_species(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .map(move |p| (p.scale, p.species - self.base_count))
    }

    /// Whether each point is at least its predecessor, up to `tolerance`
    ///
    /// Randomized extrapolation can dip slightly between neighbouring points;
    /// `tolerance` absorbs that noise.
    pub fn is_monotone(&self, tolerance: f64) -> bool {
        self.points
            .windows(2)
            .all(|w| w[1].species >= w[0].species - tolerance)
    }
}

/// Builds accumulation curves from an estimator and a scale grid
#[derive(Debug, Clone)]
pub struct CurveBuilder<E> {
    estimator: E,
    sample_size: u64,
    grid: ScaleGrid,
}

impl<E: NewSpeciesEstimator> CurveBuilder<E> {
    /// Create a builder for a sample of size `sample_size`
    pub fn new(estimator: E, sample_size: u64, grid: ScaleGrid) -> Self {
        Self {
            estimator,
            sample_size,
            grid,
        }
    }

    /// The estimator used for `t > 0`
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// The grid of scale factors
    pub fn grid(&self) -> &ScaleGrid {
        &self.grid
    }

    /// Evaluate the curve for `histogram`, drawing randomness from `source`
    #[instrument(skip(self, histogram, source), fields(estimator = self.estimator.name(), points = self.grid.len()))]
    pub fn build<S: TruncationSource + ?Sized>(
        &self,
        histogram: &FrequencyHistogram,
        source: &mut S,
    ) -> Result<AccumulationCurve> {
        unseen_core::Error::check_sample_size(self.sample_size)?;

        let base_count = histogram.observed_species();
        let mut points = Vec::with_capacity(self.grid.len());

        for t in self.grid.iter() {
            let species = if t == 0.0 {
                base_count
            } else {
                base_count
                    + self
                        .estimator
                        .estimate(histogram, self.sample_size, t, &mut *source)?
            };
            debug!(t, species, "curve point");
            points.push(CurvePoint { scale: t, species });
        }

        info!(
            points = points.len(),
            base_count,
            final_species = points.last().map(|p| p.species),
            "accumulation curve built"
        );

        Ok(AccumulationCurve::new(points, base_count))
    }
}
