use chrono::{NaiveDate, NaiveDateTime};
use nereus_calendar::{infer_timestep_hours, month_labels, regular_sequence, year_labels};

fn start(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn hourly_year_month_boundaries() {
    let ts = regular_sequence(start(2001, 1, 1), 365 * 24, 1.0).unwrap();
    let months = month_labels(&ts);

    // Index 0: Jan 1 00:00
    assert_eq!(months[0], 1);
    // Index 743: Jan 31 23:00
    assert_eq!(months[31 * 24 - 1], 1);
    // Index 744: Feb 1 00:00
    assert_eq!(months[31 * 24], 2);
    // Non-leap February: Mar 1 starts at day 59
    assert_eq!(months[59 * 24 - 1], 2);
    assert_eq!(months[59 * 24], 3);
    // Last sample: Dec 31 23:00
    assert_eq!(*months.last().unwrap(), 12);
}

#[test]
fn every_month_has_expected_sample_count() {
    let ts = regular_sequence(start(2004, 1, 1), 366 * 24, 1.0).unwrap();
    let months = month_labels(&ts);
    let days_in_month = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (m, &days) in (1..=12u8).zip(days_in_month.iter()) {
        let count = months.iter().filter(|&&x| x == m).count();
        assert_eq!(count, days * 24, "month {m}");
    }
}

#[test]
fn generated_sequence_infers_its_own_step() {
    for step in [0.5, 1.0, 3.0, 6.0] {
        let ts = regular_sequence(start(1990, 3, 1), 100, step).unwrap();
        assert_eq!(infer_timestep_hours(&ts).unwrap(), step);
    }
}

#[test]
fn multi_year_year_labels() {
    let ts = regular_sequence(start(1999, 12, 31), 3, 12.0).unwrap();
    assert_eq!(year_labels(&ts), vec![1999, 1999, 2000]);
}
