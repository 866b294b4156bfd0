//! Frequency-of-frequencies histogram
//!
//! The histogram `Phi` is the sufficient statistic for the Good-Toulmin family
//! of estimators: `Phi[i]` counts the species observed exactly `i + 1` times.

use crate::{Error, Result};
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// A validated frequency-of-frequencies histogram
///
/// Index `i` (0-based) holds the number of species seen exactly `i + 1` times.
/// Every entry is finite and non-negative. The histogram is immutable once
/// built; estimators that need more terms than are stored read through
/// [`FrequencyHistogram::value_at`], which treats the missing tail as zeros.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyHistogram {
    counts: Vec<f64>,
}

impl FrequencyHistogram {
    /// Create a histogram, rejecting negative or non-finite entries
    pub fn new(counts: Vec<f64>) -> Result<Self> {
        for (index, &value) in counts.iter().enumerate() {
            Error::check_entry(index, value)?;
        }
        Ok(Self { counts })
    }

    /// Create a histogram from any numeric counts (integers or floats)
    ///
    /// ```
    /// use unseen_core::FrequencyHistogram;
    ///
    /// let phi = FrequencyHistogram::from_counts(&[3u32, 2, 1]).unwrap();
    /// assert_eq!(phi.observed_species(), 6.0);
    /// assert_eq!(phi.implied_sample_size(), 10.0);
    /// ```
    pub fn from_counts<T: ToPrimitive>(counts: &[T]) -> Result<Self> {
        let counts = counts
            .iter()
            .enumerate()
            .map(|(index, c)| c.to_f64().ok_or(Error::InvalidHistogram { index, value: f64::NAN }))
            .collect::<Result<Vec<_>>>()?;
        Self::new(counts)
    }

    /// The stored entries
    pub fn as_slice(&self) -> &[f64] {
        &self.counts
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram stores no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entry `i`, or zero past the stored length
    #[inline]
    pub fn value_at(&self, i: usize) -> f64 {
        self.counts.get(i).copied().unwrap_or(0.0)
    }

    /// Number of distinct species in the sample (`sum_i Phi[i]`)
    pub fn observed_species(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Sample size implied by the histogram (`sum_i (i + 1) * Phi[i]`)
    pub fn implied_sample_size(&self) -> f64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i + 1) as f64 * c)
            .sum()
    }

    /// Check whether every entry is zero
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0.0)
    }
}

impl FromStr for FrequencyHistogram {
    type Err = Error;

    /// Parse whitespace-delimited counts (spaces, tabs and newlines mix freely)
    fn from_str(s: &str) -> Result<Self> {
        let counts = s
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| Error::Parse {
                        token: token.to_string(),
                        position,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(counts)
    }
}

impl TryFrom<Vec<f64>> for FrequencyHistogram {
    type Error = Error;

    fn try_from(counts: Vec<f64>) -> Result<Self> {
        Self::new(counts)
    }
}

impl fmt::Display for FrequencyHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.counts {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}
