//! Timestep inference for evenly spaced series.

use chrono::NaiveDateTime;

use crate::error::CalendarError;

/// Infers the sampling interval, in hours, of an evenly spaced timestamp axis.
///
/// The first step sets the expected spacing; every later step must match it
/// to the second.
///
/// # Errors
///
/// - [`CalendarError::TooFewTimestamps`] if fewer than two timestamps are given.
/// - [`CalendarError::NonIncreasing`] if any timestamp does not follow its
///   predecessor.
/// - [`CalendarError::UnevenSpacing`] if any step differs from the first.
pub fn infer_timestep_hours(timestamps: &[NaiveDateTime]) -> Result<f64, CalendarError> {
    if timestamps.len() < 2 {
        return Err(CalendarError::TooFewTimestamps {
            n: timestamps.len(),
        });
    }

    let expected_secs = (timestamps[1] - timestamps[0]).num_seconds();
    if expected_secs <= 0 {
        return Err(CalendarError::NonIncreasing { index: 1 });
    }

    for (i, pair) in timestamps.windows(2).enumerate().skip(1) {
        let got_secs = (pair[1] - pair[0]).num_seconds();
        if got_secs <= 0 {
            return Err(CalendarError::NonIncreasing { index: i + 1 });
        }
        if got_secs != expected_secs {
            return Err(CalendarError::UnevenSpacing {
                index: i + 1,
                expected_secs,
                got_secs,
            });
        }
    }

    Ok(expected_secs as f64 / 3600.0)
}

/// Checks that timestamps are strictly increasing, without requiring even spacing.
///
/// # Errors
///
/// Returns [`CalendarError::NonIncreasing`] with the first offending index.
pub fn check_strictly_increasing(timestamps: &[NaiveDateTime]) -> Result<(), CalendarError> {
    match timestamps.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(i) => Err(CalendarError::NonIncreasing { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn hourly(n: usize, step_hours: i64) -> Vec<NaiveDateTime> {
        (0..n)
            .map(|i| start() + TimeDelta::hours(step_hours * i as i64))
            .collect()
    }

    #[test]
    fn hourly_series() {
        let ts = hourly(48, 1);
        assert_eq!(infer_timestep_hours(&ts).unwrap(), 1.0);
    }

    #[test]
    fn three_hourly_series() {
        let ts = hourly(10, 3);
        assert_eq!(infer_timestep_hours(&ts).unwrap(), 3.0);
    }

    #[test]
    fn sub_hourly_series() {
        let ts: Vec<NaiveDateTime> = (0..5)
            .map(|i| start() + TimeDelta::minutes(30 * i))
            .collect();
        assert_eq!(infer_timestep_hours(&ts).unwrap(), 0.5);
    }

    #[test]
    fn too_few() {
        assert_eq!(
            infer_timestep_hours(&[start()]).unwrap_err(),
            CalendarError::TooFewTimestamps { n: 1 }
        );
    }

    #[test]
    fn gap_detected() {
        let mut ts = hourly(6, 1);
        ts[4] += TimeDelta::hours(1);
        ts[5] += TimeDelta::hours(1);
        assert_eq!(
            infer_timestep_hours(&ts).unwrap_err(),
            CalendarError::UnevenSpacing {
                index: 4,
                expected_secs: 3600,
                got_secs: 7200,
            }
        );
    }

    #[test]
    fn duplicate_timestamp_detected() {
        let mut ts = hourly(4, 1);
        ts[3] = ts[2];
        assert_eq!(
            infer_timestep_hours(&ts).unwrap_err(),
            CalendarError::NonIncreasing { index: 3 }
        );
    }

    #[test]
    fn decreasing_first_step() {
        let ts = [start() + TimeDelta::hours(1), start()];
        assert_eq!(
            infer_timestep_hours(&ts).unwrap_err(),
            CalendarError::NonIncreasing { index: 1 }
        );
    }

    #[test]
    fn strictly_increasing_accepts_gaps() {
        let ts = [start(), start() + TimeDelta::hours(1), start() + TimeDelta::hours(5)];
        assert!(check_strictly_increasing(&ts).is_ok());
    }

    #[test]
    fn strictly_increasing_rejects_repeat() {
        let ts = [start(), start()];
        assert_eq!(
            check_strictly_increasing(&ts).unwrap_err(),
            CalendarError::NonIncreasing { index: 1 }
        );
    }
}
