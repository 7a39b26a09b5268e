//! Statistical helper functions for waiting-time samples.
//!
//! Every function rejects an empty sample with [`StatsError::EmptyInput`]
//! instead of returning NaN.

mod error;

pub use error::StatsError;

/// Arithmetic mean of a slice.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `data` is empty.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Largest value of a slice.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `data` is empty.
pub fn max(data: &[f64]) -> Result<f64, StatsError> {
    data.iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptyInput)
}

/// Smallest value of a slice.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `data` is empty.
pub fn min(data: &[f64]) -> Result<f64, StatsError> {
    data.iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::EmptyInput)
}

/// Returns an ascending copy of `data` (total order, NaN last).
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// R's default quantile algorithm (type=7), the same linear interpolation
/// between order statistics used by NumPy's default `percentile`.
///
/// **Expects pre-sorted input** (caller's responsibility). `p` is a
/// fraction in `[0, 1]`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `sorted` is empty, or
/// [`StatsError::InvalidPercentile`] if `p` is outside `[0, 1]`.
pub fn quantile_type7(sorted: &[f64], p: f64) -> Result<f64, StatsError> {
    if sorted.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidPercentile { p: p * 100.0 });
    }
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    Ok(sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo]))
}

/// Percentile of pre-sorted data, with `pct` given in percent (0..=100).
///
/// # Errors
///
/// See [`quantile_type7`].
pub fn percentile_sorted(sorted: &[f64], pct: f64) -> Result<f64, StatsError> {
    if !(0.0..=100.0).contains(&pct) {
        return Err(StatsError::InvalidPercentile { p: pct });
    }
    quantile_type7(sorted, pct / 100.0)
}

/// Percentile of unsorted data, with `pct` given in percent (0..=100).
///
/// # Errors
///
/// See [`quantile_type7`].
pub fn percentile(data: &[f64], pct: f64) -> Result<f64, StatsError> {
    percentile_sorted(&sorted(data), pct)
}
