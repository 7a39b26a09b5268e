//! Per-sample calendar labels.

use chrono::{Datelike, NaiveDateTime};

/// Returns the calendar month (1..=12) of every timestamp.
///
/// Labels are attached to sample indices, so a waiting time that starts in
/// one month is attributed to that month even if the window opens later.
pub fn month_labels(timestamps: &[NaiveDateTime]) -> Vec<u8> {
    // chrono guarantees month() in 1..=12
    timestamps.iter().map(|t| t.month() as u8).collect()
}

/// Returns the calendar year of every timestamp.
pub fn year_labels(timestamps: &[NaiveDateTime]) -> Vec<i32> {
    timestamps.iter().map(|t| t.year()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn month_labels_basic() {
        let ts = [at(2000, 1, 31, 23), at(2000, 2, 1, 0), at(2000, 12, 31, 12)];
        assert_eq!(month_labels(&ts), vec![1, 2, 12]);
    }

    #[test]
    fn month_labels_leap_day() {
        let ts = [at(2004, 2, 29, 0), at(2004, 3, 1, 0)];
        assert_eq!(month_labels(&ts), vec![2, 3]);
    }

    #[test]
    fn month_labels_empty() {
        assert!(month_labels(&[]).is_empty());
    }

    #[test]
    fn year_labels_cross_new_year() {
        let ts = [at(1999, 12, 31, 23), at(2000, 1, 1, 0)];
        assert_eq!(year_labels(&ts), vec![1999, 2000]);
    }
}
