//! Waiting-time reconstruction.
//!
//! Expands the hit set into a per-sample countdown to the next hit, then
//! converts it to cycle time (waiting time plus the operation itself) in
//! days.

use crate::error::WindowError;

/// Hours per day, for converting cycle times to days.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Hours from each sample until the start of the next operable window.
///
/// Returns `W` of length `max(hits) + 1` with
/// `W[i] = timestep * (next_hit(i) - i)`, where `next_hit(i)` is the
/// smallest hit `>= i`. `W` is zero exactly at hits and counts down by one
/// timestep per sample in between.
///
/// # Precondition
///
/// `hits` must be strictly ascending, as produced by
/// [`detect_hits`](crate::detect_hits). This is only checked in debug builds.
///
/// # Errors
///
/// - [`WindowError::NoOperableWindowFound`] if `hits` is empty.
/// - [`WindowError::InvalidTimestep`] if `timestep` is non-finite or not positive.
pub fn waiting_times(hits: &[usize], timestep: f64) -> Result<Vec<f64>, WindowError> {
    let Some(&last) = hits.last() else {
        return Err(WindowError::NoOperableWindowFound);
    };
    if !timestep.is_finite() || timestep <= 0.0 {
        return Err(WindowError::InvalidTimestep { timestep });
    }
    debug_assert!(
        hits.windows(2).all(|w| w[0] < w[1]),
        "hits must be strictly ascending"
    );

    let mut waiting = Vec::with_capacity(last + 1);
    // First index not yet covered by a countdown segment.
    let mut next = 0;
    for &hit in hits {
        waiting.extend((next..=hit).map(|i| (hit - i) as f64 * timestep));
        next = hit + 1;
    }
    Ok(waiting)
}

/// Cycle time in days: `(waiting + op_duration) / 24` for every sample.
pub fn cycle_times(waiting: &[f64], op_duration: f64) -> Vec<f64> {
    waiting
        .iter()
        .map(|&w| (w + op_duration) / HOURS_PER_DAY)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn worked_example() {
        let w = waiting_times(&[0, 1, 2, 7], 1.0).unwrap();
        assert_eq!(w, vec![0.0, 0.0, 0.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn first_hit_not_at_zero() {
        let w = waiting_times(&[3], 1.0).unwrap();
        assert_eq!(w, vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn single_hit_at_zero() {
        assert_eq!(waiting_times(&[0], 6.0).unwrap(), vec![0.0]);
    }

    #[test]
    fn scales_with_timestep() {
        let w = waiting_times(&[2, 4], 3.0).unwrap();
        assert_eq!(w, vec![6.0, 3.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn empty_hits_is_no_window() {
        assert_eq!(
            waiting_times(&[], 1.0).unwrap_err(),
            WindowError::NoOperableWindowFound
        );
    }

    #[test]
    fn bad_timestep() {
        assert!(matches!(
            waiting_times(&[1], 0.0),
            Err(WindowError::InvalidTimestep { .. })
        ));
    }

    #[test]
    fn matches_closed_form() {
        let hits = [2usize, 3, 9, 10, 15];
        let timestep = 0.5;
        let w = waiting_times(&hits, timestep).unwrap();
        assert_eq!(w.len(), 16);
        for (i, &wi) in w.iter().enumerate() {
            let next = hits.iter().copied().find(|&h| h >= i).unwrap();
            assert_relative_eq!(wi, (next - i) as f64 * timestep, epsilon = 1e-12);
        }
    }

    #[test]
    fn cycle_times_in_days() {
        let c = cycle_times(&[0.0, 12.0, 36.0], 12.0);
        assert_relative_eq!(c[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(c[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c[2], 2.0, epsilon = 1e-12);
    }
}
