//! Species accumulation curves from the smoothed Good-Toulmin estimator
//!
//! This crate drives an unseen species estimator over a grid of scale factors
//! and produces the expected number of distinct species as a function of the
//! (hypothetical) sample size:
//!
//! - **[`ScaleGrid`]**: `0, step, 2 * step, ...` below a maximum scale
//! - **[`CurveBuilder`]**: evaluates any [`unseen_core::NewSpeciesEstimator`]
//!   on the grid, using the observed species count at `t = 0`
//! - **[`io`]**: histogram files in, delimited curve tables out
//! - **[`CurveConfig`]**: the run parameters, loadable from JSON
//!
//! # Example
//!
//! ```rust
//! use unseen_core::FrequencyHistogram;
//! use unseen_curve::{accumulation_curve, CurveConfig};
//!
//! let phi: FrequencyHistogram = "12 5 2 1".parse().unwrap();
//! let config = CurveConfig::new(32, 3.0).with_step(0.5).with_seed(7);
//!
//! let curve = accumulation_curve(&phi, &config).unwrap();
//! assert_eq!(curve.len(), 6);
//! assert_eq!(curve.base_count(), 20.0);
//! ```

mod config;
mod curve;
mod error;
mod grid;
pub mod io;

pub use config::{CurveConfig, OutputFormat, DEFAULT_STEP};
pub use curve::{AccumulationCurve, CurveBuilder, CurvePoint};
pub use error::{Error, Result};
pub use grid::{ScaleGrid, MAX_GRID_POINTS};
pub use io::{read_histogram, write_curve, write_curve_file};

use tracing::info;
use unseen_core::FrequencyHistogram;
use unseen_toulmin::{RngTruncationSource, SmoothedGoodToulmin};

/// Build the smoothed Good-Toulmin accumulation curve described by `config`
///
/// The configuration is validated before any estimation begins. With a seed
/// the curve is reproducible; without one the generator is entropy-seeded.
pub fn accumulation_curve(
    histogram: &FrequencyHistogram,
    config: &CurveConfig,
) -> Result<AccumulationCurve> {
    config.validate()?;

    let implied = histogram.implied_sample_size();
    if (config.sample_size as f64) < implied {
        tracing::warn!(
            sample_size = config.sample_size,
            implied,
            "sample size is smaller than the histogram implies"
        );
    }

    let estimator = SmoothedGoodToulmin::new(config.smoothing_samples);
    let builder = CurveBuilder::new(estimator, config.sample_size, config.grid()?);

    let curve = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded truncation source");
            builder.build(histogram, &mut RngTruncationSource::seeded(seed))?
        }
        None => builder.build(histogram, &mut RngTruncationSource::from_entropy())?,
    };
    Ok(curve)
}
