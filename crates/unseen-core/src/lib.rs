//! Core traits and types for unseen species estimation
//!
//! This crate provides the building blocks shared by the estimator and the
//! accumulation-curve workflow:
//!
//! - **[`FrequencyHistogram`]**: the validated frequency-of-frequencies `Phi`
//! - **[`series`]**: the alternating Good-Toulmin series and its truncations
//! - **[`TruncationSource`]**: injected randomness for truncation lengths
//! - **[`NewSpeciesEstimator`]**: the seam consumed by curve builders
//!
//! # Example
//!
//! ```rust
//! use unseen_core::{series, FrequencyHistogram};
//!
//! let phi: FrequencyHistogram = "3 2 1".parse().unwrap();
//! let new_species = series::full_series(&phi, 0.5);
//! assert!((new_species - 1.125).abs() < 1e-12);
//! ```

pub mod error;
pub mod histogram;
pub mod series;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use histogram::FrequencyHistogram;
pub use traits::{NewSpeciesEstimator, TruncationSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{FrequencyHistogram, NewSpeciesEstimator, Result, TruncationSource};
}
