//! Condition mask construction.
//!
//! Combines up to three variable series and their thresholds into one
//! boolean feasibility indicator per sample.

use crate::error::WindowError;

/// Maximum number of simultaneous threshold conditions.
pub const MAX_CONDITIONS: usize = 3;

/// Builds the per-sample feasibility mask.
///
/// `mask[i]` is `true` when every variable is strictly below its threshold
/// at sample `i`. A NaN sample never satisfies `<` and is therefore
/// infeasible.
///
/// # Errors
///
/// - [`WindowError::DimensionMismatch`] if `thresholds.len() != series.len()`
///   or the series differ in length.
/// - [`WindowError::UnsupportedArity`] if no series or more than
///   [`MAX_CONDITIONS`] series are given.
pub fn condition_mask(series: &[&[f64]], thresholds: &[f64]) -> Result<Vec<bool>, WindowError> {
    if thresholds.len() != series.len() {
        return Err(WindowError::DimensionMismatch {
            what: "thresholds".to_string(),
            expected: series.len(),
            got: thresholds.len(),
        });
    }
    if series.is_empty() || series.len() > MAX_CONDITIONS {
        return Err(WindowError::UnsupportedArity {
            n_vars: series.len(),
        });
    }

    let n = series[0].len();
    if let Some(bad) = series.iter().find(|s| s.len() != n) {
        return Err(WindowError::DimensionMismatch {
            what: "series length".to_string(),
            expected: n,
            got: bad.len(),
        });
    }

    let mut mask = vec![true; n];
    for (values, &threshold) in series.iter().zip(thresholds) {
        for (m, &v) in mask.iter_mut().zip(values.iter()) {
            *m &= v < threshold;
        }
    }
    Ok(mask)
}
