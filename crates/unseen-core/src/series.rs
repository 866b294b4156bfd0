//! The alternating Good-Toulmin series
//!
//! The expected number of new species after scaling the sample by `t` is the
//! analytic continuation
//!
//! ```text
//! U(t) = sum_{i >= 0} -(-t)^(i+1) * Phi[i]
//! ```
//!
//! For `t <= 1` the terms are bounded by `Phi[i]` and the full sum is stable.
//! For `t > 1` the coefficients grow geometrically, so callers truncate the
//! series and average over truncation lengths.

use crate::FrequencyHistogram;

/// Coefficient of `Phi[i]` in the Good-Toulmin series: `-(-t)^(i+1)`
#[inline]
pub fn good_toulmin_coefficient(t: f64, i: usize) -> f64 {
    let power = (-t).powi(i as i32 + 1);
    -power
}

/// The first `terms` coefficients `-(-t)^1, -(-t)^2, ...`
pub fn good_toulmin_coefficients(t: f64, terms: usize) -> Vec<f64> {
    let mut coefficients = Vec::with_capacity(terms);
    let mut power = 1.0;
    for _ in 0..terms {
        power *= -t;
        coefficients.push(-power);
    }
    coefficients
}

/// Sum of the first `terms` series terms over a zero-extended view of `histogram`
///
/// Entries past the stored length contribute zero. The histogram itself is
/// never extended, so repeated calls with different `terms` all see the same
/// base data.
pub fn truncated_series(histogram: &FrequencyHistogram, t: f64, terms: usize) -> f64 {
    let mut sum = 0.0;
    let mut power = 1.0;
    for i in 0..terms {
        power *= -t;
        sum += -power * histogram.value_at(i);
    }
    sum
}

/// All truncations up to `max_terms` at once
///
/// Element `l` of the result equals `truncated_series(histogram, t, l)`, so the
/// result has `max_terms + 1` elements and starts with `0.0`.
pub fn partial_sums(histogram: &FrequencyHistogram, t: f64, max_terms: usize) -> Vec<f64> {
    let mut sums = Vec::with_capacity(max_terms + 1);
    sums.push(0.0);
    let mut sum = 0.0;
    let mut power = 1.0;
    for i in 0..max_terms {
        power *= -t;
        sum += -power * histogram.value_at(i);
        sums.push(sum);
    }
    sums
}

/// The untruncated series over every stored entry
///
/// This is the deterministic Good-Toulmin estimate used when `t <= 1`.
pub fn full_series(histogram: &FrequencyHistogram, t: f64) -> f64 {
    good_toulmin_coefficients(t, histogram.len())
        .iter()
        .zip(histogram.as_slice())
        .map(|(c, phi)| c * phi)
        .sum()
}
