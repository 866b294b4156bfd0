//! Configuration for accumulation-curve runs

use crate::{Error, Result, ScaleGrid};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use unseen_toulmin::DEFAULT_SMOOTHING_SAMPLES;

/// Default spacing of the scale grid
pub const DEFAULT_STEP: f64 = 0.1;

/// Layout of the written curve table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFormat {
    /// Column delimiter, a single ASCII character
    pub delimiter: char,
    /// Whether to write a `scale` / `expected_species` header row
    pub header: bool,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            header: false,
        }
    }
}

impl OutputFormat {
    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable the header row
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// The delimiter as a byte, rejecting non-ASCII characters
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() || self.delimiter == '\n' || self.delimiter == '"' {
            return Err(Error::InvalidConfig(format!(
                "delimiter {:?} must be a single ASCII character other than newline or quote",
                self.delimiter
            )));
        }
        Ok(self.delimiter as u8)
    }
}

/// Parameters of one accumulation-curve run
///
/// Mirrors the four command-line parameters (sample size, maximum scale,
/// smoothing samples, step) plus an optional seed and the output layout.
///
/// ```
/// use unseen_curve::CurveConfig;
///
/// let config: CurveConfig = serde_json::from_str(
///     r#"{ "sample_size": 500, "max_scale": 4.0, "seed": 11 }"#,
/// ).unwrap();
/// assert_eq!(config.step, 0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Size `n` of the observed sample
    pub sample_size: u64,
    /// Exclusive upper bound of the scale grid
    pub max_scale: f64,
    /// Truncation draws averaged per extrapolated point
    #[serde(default = "default_smoothing_samples")]
    pub smoothing_samples: usize,
    /// Spacing of the scale grid
    #[serde(default = "default_step")]
    pub step: f64,
    /// Seed for reproducible curves; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_smoothing_samples() -> usize {
    DEFAULT_SMOOTHING_SAMPLES
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl CurveConfig {
    /// Create a configuration with default step, smoothing and output
    pub fn new(sample_size: u64, max_scale: f64) -> Self {
        Self {
            sample_size,
            max_scale,
            smoothing_samples: DEFAULT_SMOOTHING_SAMPLES,
            step: DEFAULT_STEP,
            seed: None,
            output: OutputFormat::default(),
        }
    }

    /// Set the grid spacing
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the number of smoothing samples
    pub fn with_smoothing_samples(mut self, smoothing_samples: usize) -> Self {
        self.smoothing_samples = smoothing_samples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the output layout
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// The scale grid described by this configuration
    pub fn grid(&self) -> Result<ScaleGrid> {
        ScaleGrid::new(self.max_scale, self.step)
    }

    /// Check every parameter before any estimation begins
    pub fn validate(&self) -> Result<()> {
        unseen_core::Error::check_sample_size(self.sample_size)?;
        let grid = self.grid()?;
        if self.smoothing_samples == 0 {
            if let Some(t) = grid.iter().find(|&t| t > 1.0) {
                return Err(unseen_core::Error::DegenerateSmoothingCount { t }.into());
            }
        }
        self.output.delimiter_byte()?;
        Ok(())
    }
}
