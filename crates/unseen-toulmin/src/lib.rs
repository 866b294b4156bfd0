//! Smoothed Good-Toulmin estimation of unseen species
//!
//! Given the frequency-of-frequencies histogram `Phi` of a sample of size `n`,
//! this crate estimates how many species not yet observed would appear if the
//! sample were scaled by a factor `t`:
//!
//! - **Interpolation** (`t <= 1`): the classical Good-Toulmin series, exact
//!   and deterministic.
//! - **Extrapolation** (`t > 1`): the series truncated after a random,
//!   Binomial(k, q) number of terms, averaged over many truncations
//!   (Orlitsky, Suresh & Wu, "Optimal prediction of the number of unseen
//!   species", arXiv:1511.07428).
//!
//! Randomness is injected through [`unseen_core::TruncationSource`];
//! [`RngTruncationSource`] adapts any [`rand::Rng`].
//!
//! # Examples
//!
//! ```rust
//! use unseen_toulmin::{smoothed_good_toulmin, RngTruncationSource};
//!
//! let phi = [12.0, 5.0, 2.0, 1.0];
//! let mut source = RngTruncationSource::seeded(2015);
//!
//! let a = smoothed_good_toulmin(&phi, 27, 3.0, 2000, &mut source).unwrap();
//! let b = smoothed_good_toulmin(&phi, 27, 3.0, 2000, &mut RngTruncationSource::seeded(2015)).unwrap();
//! assert_eq!(a, b);
//! ```

mod smoothed;
mod truncation;

pub use smoothed::{smoothed_good_toulmin, SmoothedGoodToulmin, DEFAULT_SMOOTHING_SAMPLES};
pub use truncation::{RngTruncationSource, TruncationPlan};

pub use unseen_core::{Error, Result};
