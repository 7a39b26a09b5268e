//! Operable hours per calendar year.
//!
//! Companion statistic to weather windows: how many hours each year a
//! single variable stays strictly below each of several thresholds.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::WindowError;

/// Hours below each threshold, per calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperableHours {
    /// Distinct calendar years, ascending.
    pub years: Vec<i32>,
    /// Thresholds, in input order.
    pub thresholds: Vec<f64>,
    /// `hours[t][y]`: hours below `thresholds[t]` during `years[y]`.
    pub hours: Vec<Vec<f64>>,
}

impl OperableHours {
    /// Hours below `thresholds[threshold_idx]` during `year`, if both exist.
    pub fn get(&self, threshold_idx: usize, year: i32) -> Option<f64> {
        let y = self.years.binary_search(&year).ok()?;
        self.hours.get(threshold_idx).map(|row| row[y])
    }
}

/// Counts, per year and threshold, the hours with `value < threshold`.
///
/// Each qualifying sample contributes `timestep` hours. NaN samples never
/// qualify.
///
/// # Errors
///
/// - [`WindowError::DimensionMismatch`] if `values` and `years` differ in length.
/// - [`WindowError::EmptySeries`] if `values` is empty.
/// - [`WindowError::InvalidTimestep`] if `timestep` is non-finite or not positive.
pub fn operable_hours_per_year(
    values: &[f64],
    years: &[i32],
    thresholds: &[f64],
    timestep: f64,
) -> Result<OperableHours, WindowError> {
    if values.len() != years.len() {
        return Err(WindowError::DimensionMismatch {
            what: "year labels".to_string(),
            expected: values.len(),
            got: years.len(),
        });
    }
    if values.is_empty() {
        return Err(WindowError::EmptySeries);
    }
    if !timestep.is_finite() || timestep <= 0.0 {
        return Err(WindowError::InvalidTimestep { timestep });
    }

    let columns: BTreeMap<i32, usize> = {
        let mut distinct: Vec<i32> = years.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.into_iter().enumerate().map(|(i, y)| (y, i)).collect()
    };

    let mut counts = vec![vec![0usize; columns.len()]; thresholds.len()];
    for (&v, y) in values.iter().zip(years) {
        // every year in `years` has a column
        let col = columns[y];
        for (row, &t) in counts.iter_mut().zip(thresholds) {
            if v < t {
                row[col] += 1;
            }
        }
    }

    Ok(OperableHours {
        years: columns.into_keys().collect(),
        thresholds: thresholds.to_vec(),
        hours: counts
            .into_iter()
            .map(|row| row.into_iter().map(|c| c as f64 * timestep).collect())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_year_and_threshold() {
        let values = [0.5, 1.5, 2.5, 0.5, 0.5, 3.5];
        let years = [2000, 2000, 2000, 2001, 2001, 2001];
        let oh = operable_hours_per_year(&values, &years, &[1.0, 3.0], 1.0).unwrap();
        assert_eq!(oh.years, vec![2000, 2001]);
        assert_eq!(oh.thresholds, vec![1.0, 3.0]);
        assert_eq!(oh.hours, vec![vec![1.0, 2.0], vec![3.0, 2.0]]);
    }

    #[test]
    fn scales_with_timestep() {
        let values = [0.5, 0.5];
        let years = [1999, 1999];
        let oh = operable_hours_per_year(&values, &years, &[1.0], 3.0).unwrap();
        assert_eq!(oh.get(0, 1999), Some(6.0));
    }

    #[test]
    fn strict_comparison_and_nan() {
        let values = [1.0, f64::NAN, 0.9];
        let years = [2010, 2010, 2010];
        let oh = operable_hours_per_year(&values, &years, &[1.0], 1.0).unwrap();
        assert_eq!(oh.get(0, 2010), Some(1.0));
    }

    #[test]
    fn unordered_years_are_sorted() {
        let values = [0.0, 0.0, 0.0];
        let years = [2002, 2000, 2002];
        let oh = operable_hours_per_year(&values, &years, &[1.0], 1.0).unwrap();
        assert_eq!(oh.years, vec![2000, 2002]);
        assert_eq!(oh.get(0, 2002), Some(2.0));
        assert_eq!(oh.get(0, 2001), None);
        assert_eq!(oh.get(1, 2000), None);
    }

    #[test]
    fn no_thresholds_gives_empty_matrix() {
        let oh = operable_hours_per_year(&[1.0], &[2000], &[], 1.0).unwrap();
        assert!(oh.hours.is_empty());
    }

    #[test]
    fn errors() {
        assert!(matches!(
            operable_hours_per_year(&[1.0, 2.0], &[2000], &[1.0], 1.0),
            Err(WindowError::DimensionMismatch { .. })
        ));
        assert_eq!(
            operable_hours_per_year(&[], &[], &[1.0], 1.0).unwrap_err(),
            WindowError::EmptySeries
        );
        assert!(matches!(
            operable_hours_per_year(&[1.0], &[2000], &[1.0], 0.0),
            Err(WindowError::InvalidTimestep { .. })
        ));
    }
}
