//! Timestamp sequence generation.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::CalendarError;

/// Generates `n` timestamps starting at `start`, spaced by `step_hours`.
///
/// The step is rounded to whole seconds.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidStep`] if `step_hours` is non-finite,
/// rounds to less than one second, or overflows the date range.
///
/// # Example
///
/// ```ignore
/// let start = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap().and_hms_opt(22, 0, 0).unwrap();
/// let ts = regular_sequence(start, 4, 1.0).unwrap();
/// // 22:00, 23:00, 00:00 (2001-01-01), 01:00 (2001-01-01)
/// ```
pub fn regular_sequence(
    start: NaiveDateTime,
    n: usize,
    step_hours: f64,
) -> Result<Vec<NaiveDateTime>, CalendarError> {
    let invalid = || CalendarError::InvalidStep { step_hours };
    if !step_hours.is_finite() {
        return Err(invalid());
    }
    let step_secs = (step_hours * 3600.0).round();
    if step_secs < 1.0 || step_secs > i32::MAX as f64 {
        return Err(invalid());
    }
    let step = TimeDelta::seconds(step_secs as i64);

    let mut timestamps = Vec::with_capacity(n);
    let mut current = start;
    for i in 0..n {
        if i > 0 {
            current = current.checked_add_signed(step).ok_or_else(invalid)?;
        }
        timestamps.push(current);
    }
    Ok(timestamps)
}
