//! Run detection: start indices of fully feasible windows.

use crate::error::WindowError;

/// Number of samples spanned by an operation: `floor(op_duration / timestep)`.
///
/// # Errors
///
/// - [`WindowError::InvalidTimestep`] if `timestep` is non-finite or not positive.
/// - [`WindowError::InvalidWindowLength`] if `op_duration` is non-finite or
///   not positive, or if the ratio floors to zero samples.
pub fn window_length(op_duration: f64, timestep: f64) -> Result<usize, WindowError> {
    if !timestep.is_finite() || timestep <= 0.0 {
        return Err(WindowError::InvalidTimestep { timestep });
    }
    if !op_duration.is_finite() || op_duration <= 0.0 {
        return Err(WindowError::InvalidWindowLength {
            reason: format!("op_duration must be finite and > 0 hours, got {op_duration}"),
        });
    }

    let samples = (op_duration / timestep).floor();
    if samples < 1.0 {
        return Err(WindowError::InvalidWindowLength {
            reason: format!(
                "op_duration {op_duration} h spans less than one {timestep} h timestep"
            ),
        });
    }
    if samples >= usize::MAX as f64 {
        return Err(WindowError::InvalidWindowLength {
            reason: format!("op_duration {op_duration} h spans too many samples"),
        });
    }
    Ok(samples as usize)
}

/// Finds every start index whose `window_len`-sample forward window is
/// entirely feasible.
///
/// Uses a running count of feasible samples, so the whole mask is scanned
/// once. Returns an ascending, possibly empty, list of indices in
/// `[0, mask.len() - window_len]`. If the window is longer than the mask no
/// window fits and the result is empty.
///
/// # Errors
///
/// Returns [`WindowError::InvalidWindowLength`] if `window_len` is zero.
pub fn detect_hits(mask: &[bool], window_len: usize) -> Result<Vec<usize>, WindowError> {
    if window_len == 0 {
        return Err(WindowError::InvalidWindowLength {
            reason: "window must span at least one sample".to_string(),
        });
    }
    let n = mask.len();
    if window_len > n {
        return Ok(Vec::new());
    }

    let mut feasible = mask[..window_len].iter().filter(|&&m| m).count();
    let mut hits = Vec::new();
    if feasible == window_len {
        hits.push(0);
    }

    for start in 1..=n - window_len {
        if mask[start - 1] {
            feasible -= 1;
        }
        if mask[start + window_len - 1] {
            feasible += 1;
        }
        if feasible == window_len {
            hits.push(start);
        }
    }
    Ok(hits)
}
