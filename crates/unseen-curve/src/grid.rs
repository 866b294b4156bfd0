//! Grid of scale factors for accumulation curves

use crate::{Error, Result};

/// Largest number of grid points accepted
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Evenly spaced scale factors `0, step, 2 * step, ...` strictly below `max_scale`
///
/// Points are computed as `i * step` rather than by repeated addition, so long
/// grids do not drift.
///
/// ```
/// use unseen_curve::ScaleGrid;
///
/// let grid = ScaleGrid::new(1.0, 0.25).unwrap();
/// let points: Vec<f64> = grid.iter().collect();
/// assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleGrid {
    max_scale: f64,
    step: f64,
    len: usize,
}

impl ScaleGrid {
    /// Create a grid over `[0, max_scale)` with spacing `step`
    pub fn new(max_scale: f64, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "step {step} must be finite and positive"
            )));
        }
        if !max_scale.is_finite() || max_scale <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "maximum scale {max_scale} must be finite and positive"
            )));
        }

        let points = (max_scale / step).ceil();
        if points > MAX_GRID_POINTS as f64 {
            return Err(Error::InvalidGrid(format!(
                "{points} points exceeds the limit of {MAX_GRID_POINTS}"
            )));
        }

        Ok(Self {
            max_scale,
            step,
            len: points as usize,
        })
    }

    /// Upper bound (exclusive)
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Spacing between points
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a validated grid, which contains at least `t = 0`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scale factors in increasing order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| i as f64 * self.step)
    }

    /// Whether any point lies in the extrapolation regime (`t > 1`)
    pub fn extrapolates(&self) -> bool {
        self.iter().any(|t| t > 1.0)
    }
}
