//! Error types for unseen species estimation
//!
//! Provides the error taxonomy shared by all unseen-stats crates.

use thiserror::Error;

/// Core error type for unseen species estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Sample size must be strictly positive
    #[error("Invalid sample size {n}: sample size must be positive")]
    InvalidSampleSize { n: u64 },

    /// Scale factor outside the domain of the requested computation
    #[error("Invalid scale factor {t}: {reason}")]
    InvalidScaleFactor { t: f64, reason: &'static str },

    /// Histogram entry that is negative or not finite
    #[error("Invalid histogram entry {value} at index {index}: entries must be finite and non-negative")]
    InvalidHistogram { index: usize, value: f64 },

    /// Zero smoothing draws requested in the extrapolation regime
    #[error("Degenerate smoothing count for scale factor {t}: at least one smoothing sample is required")]
    DegenerateSmoothingCount { t: f64 },

    /// Malformed token in a textual histogram
    #[error("Cannot parse histogram token {token:?} at position {position}")]
    Parse { token: String, position: usize },

    /// Failure while drawing from the smoothing distribution
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for the validation every estimator performs

impl Error {
    /// Reject a zero sample size
    pub fn check_sample_size(n: u64) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidSampleSize { n });
        }
        Ok(())
    }

    /// Reject scale factors that are not finite and strictly positive
    pub fn check_scale_factor(t: f64) -> Result<()> {
        if !t.is_finite() {
            return Err(Error::InvalidScaleFactor {
                t,
                reason: "scale factor must be finite",
            });
        }
        if t <= 0.0 {
            return Err(Error::InvalidScaleFactor {
                t,
                reason: "scale factor must be positive",
            });
        }
        Ok(())
    }

    /// Check a single histogram entry
    pub fn check_entry(index: usize, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidHistogram { index, value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSampleSize { n: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid sample size 0: sample size must be positive"
        );

        let err = Error::InvalidScaleFactor {
            t: -1.0,
            reason: "scale factor must be positive",
        };
        assert_eq!(
            err.to_string(),
            "Invalid scale factor -1: scale factor must be positive"
        );

        let err = Error::InvalidHistogram { index: 2, value: -3.0 };
        assert_eq!(
            err.to_string(),
            "Invalid histogram entry -3 at index 2: entries must be finite and non-negative"
        );

        let err = Error::Parse {
            token: "abc".to_string(),
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Cannot parse histogram token \"abc\" at position 4"
        );
    }

    #[test]
    fn test_check_sample_size() {
        assert!(matches!(
            Error::check_sample_size(0),
            Err(Error::InvalidSampleSize { n: 0 })
        ));
        assert!(Error::check_sample_size(1).is_ok());
    }

    #[test]
    fn test_check_scale_factor() {
        assert!(Error::check_scale_factor(0.5).is_ok());
        assert!(Error::check_scale_factor(1.0).is_ok());
        assert!(Error::check_scale_factor(7.0).is_ok());

        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Error::check_scale_factor(t),
                    Err(Error::InvalidScaleFactor { .. })
                ),
                "t = {t} should be rejected"
            );
        }
    }

    #[test]
    fn test_check_entry() {
        assert!(Error::check_entry(0, 0.0).is_ok());
        assert!(Error::check_entry(0, 12.0).is_ok());
        assert!(Error::check_entry(3, -0.5).is_err());
        assert!(Error::check_entry(3, f64::NAN).is_err());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }
}
