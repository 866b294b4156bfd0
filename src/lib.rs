//! Unseen species extrapolation
//!
//! Umbrella crate for the unseen-stats workspace. Given the
//! frequency-of-frequencies histogram of a sample, it estimates how many new
//! species a sample `t` times larger (or smaller) would reveal, using the
//! smoothed Good-Toulmin estimator, and builds species accumulation curves
//! from those estimates.
//!
//! - [`unseen_core`]: histogram type, series primitives, error taxonomy, seam traits
//! - [`unseen_toulmin`]: the smoothed Good-Toulmin estimator
//! - [`unseen_curve`]: scale grids, accumulation curves, file I/O and configuration
//!
//! # Example
//!
//! ```rust
//! use unseen_stats::prelude::*;
//!
//! let phi = FrequencyHistogram::from_counts(&[3u32, 2, 1]).unwrap();
//! let mut source = RngTruncationSource::seeded(42);
//!
//! let estimator = SmoothedGoodToulmin::new(1000);
//! let doubled = estimator.estimate(&phi, 10, 2.0, &mut source).unwrap();
//! println!("expected new species at 2x: {doubled:.2}");
//! ```

pub use unseen_core;
pub use unseen_curve;
pub use unseen_toulmin;

pub use unseen_core::{Error, FrequencyHistogram, NewSpeciesEstimator, Result, TruncationSource};
pub use unseen_curve::{accumulation_curve, AccumulationCurve, CurveConfig};
pub use unseen_toulmin::{smoothed_good_toulmin, RngTruncationSource, SmoothedGoodToulmin};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use unseen_core::prelude::*;
    pub use unseen_curve::{
        accumulation_curve, AccumulationCurve, CurveBuilder, CurveConfig, CurvePoint,
        OutputFormat, ScaleGrid,
    };
    pub use unseen_toulmin::{
        smoothed_good_toulmin, RngTruncationSource, SmoothedGoodToulmin, TruncationPlan,
    };
}
