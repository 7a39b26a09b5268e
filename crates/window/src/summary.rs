//! Waiting-time statistics, optionally conditioned on calendar month.

use std::fmt;

use serde::Serialize;

use crate::config::MonthFilter;
use crate::error::WindowError;

/// A statistic that can be requested from [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistic {
    /// Arithmetic mean.
    Mean,
    /// Linear-interpolation (type 7) percentile, in percent (0..=100).
    Percentile(f64),
    /// Largest value.
    Max,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Mean => f.write_str("mean"),
            Statistic::Percentile(p) => write!(f, "p{p}"),
            Statistic::Max => f.write_str("max"),
        }
    }
}

/// Statistics reported for a single-variable condition.
pub const SINGLE_VARIABLE_STATS: [Statistic; 4] = [
    Statistic::Mean,
    Statistic::Percentile(10.0),
    Statistic::Percentile(50.0),
    Statistic::Percentile(90.0),
];

/// Statistics reported for a multi-variable condition.
pub const MULTI_VARIABLE_STATS: [Statistic; 6] = [
    Statistic::Mean,
    Statistic::Percentile(10.0),
    Statistic::Percentile(50.0),
    Statistic::Percentile(90.0),
    Statistic::Percentile(95.0),
    Statistic::Max,
];

/// Requested statistics over a (possibly month-filtered) cycle-time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    filter: MonthFilter,
    n_samples: usize,
    values: Vec<(Statistic, f64)>,
}

impl Summary {
    /// Returns the month filter the summary was computed under.
    pub fn filter(&self) -> MonthFilter {
        self.filter
    }

    /// Number of cycle-time samples that passed the filter.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Statistic/value pairs, in request order.
    pub fn values(&self) -> &[(Statistic, f64)] {
        &self.values
    }

    /// Looks up the value of one requested statistic.
    pub fn get(&self, stat: Statistic) -> Option<f64> {
        self.values
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|&(_, v)| v)
    }
}

/// Cycle-time statistics in days for the single-variable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitingStats {
    pub mean: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Cycle-time statistics in days for the multi-variable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitingStatsExtended {
    pub mean: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub max: f64,
}

impl WaitingStats {
    /// Summarises `cycle` with [`SINGLE_VARIABLE_STATS`].
    ///
    /// # Errors
    ///
    /// See [`summarize`].
    pub fn from_cycle(
        cycle: &[f64],
        months: &[u8],
        filter: MonthFilter,
    ) -> Result<Self, WindowError> {
        let [mean, p10, p50, p90] =
            summarize_fixed(cycle, months, filter, &SINGLE_VARIABLE_STATS)?;
        Ok(Self { mean, p10, p50, p90 })
    }
}

impl WaitingStatsExtended {
    /// Summarises `cycle` with [`MULTI_VARIABLE_STATS`].
    ///
    /// # Errors
    ///
    /// See [`summarize`].
    pub fn from_cycle(
        cycle: &[f64],
        months: &[u8],
        filter: MonthFilter,
    ) -> Result<Self, WindowError> {
        let [mean, p10, p50, p90, p95, max] =
            summarize_fixed(cycle, months, filter, &MULTI_VARIABLE_STATS)?;
        Ok(Self {
            mean,
            p10,
            p50,
            p90,
            p95,
            max,
        })
    }
}

/// Computes the requested statistics over the cycle times that pass `filter`.
///
/// `months[i]` is the calendar month of sample `i`; the filter selects
/// samples by the month in which the wait starts.
///
/// # Errors
///
/// - [`WindowError::DimensionMismatch`] if `months` and `cycle` differ in length.
/// - [`WindowError::InsufficientData`] if a month filter selects nothing.
/// - [`WindowError::EmptySeries`] if `cycle` is empty and no filter applies.
/// - [`WindowError::InvalidPercentile`] for a percentile outside 0..=100.
pub fn summarize(
    cycle: &[f64],
    months: &[u8],
    filter: MonthFilter,
    stats: &[Statistic],
) -> Result<Summary, WindowError> {
    let selected = select(cycle, months, filter)?;
    let sorted = nereus_stats::sorted(&selected);
    let values = stats
        .iter()
        .map(|&stat| Ok((stat, evaluate(stat, &selected, &sorted)?)))
        .collect::<Result<Vec<_>, WindowError>>()?;
    Ok(Summary {
        filter,
        n_samples: selected.len(),
        values,
    })
}

/// Fixed-size variant of [`summarize`] backing the typed stats structs.
fn summarize_fixed<const N: usize>(
    cycle: &[f64],
    months: &[u8],
    filter: MonthFilter,
    stats: &[Statistic; N],
) -> Result<[f64; N], WindowError> {
    let selected = select(cycle, months, filter)?;
    let sorted = nereus_stats::sorted(&selected);
    let mut out = [0.0; N];
    for (slot, &stat) in out.iter_mut().zip(stats) {
        *slot = evaluate(stat, &selected, &sorted)?;
    }
    Ok(out)
}

fn select(cycle: &[f64], months: &[u8], filter: MonthFilter) -> Result<Vec<f64>, WindowError> {
    if months.len() != cycle.len() {
        return Err(WindowError::DimensionMismatch {
            what: "month labels".to_string(),
            expected: cycle.len(),
            got: months.len(),
        });
    }

    let selected: Vec<f64> = cycle
        .iter()
        .zip(months)
        .filter(|&(_, &m)| filter.matches(m))
        .map(|(&c, _)| c)
        .collect();

    if selected.is_empty() {
        return Err(match filter.month() {
            Some(m) => WindowError::InsufficientData { month: m.get() },
            None => WindowError::EmptySeries,
        });
    }
    Ok(selected)
}

fn evaluate(stat: Statistic, selected: &[f64], sorted: &[f64]) -> Result<f64, WindowError> {
    let value = match stat {
        Statistic::Mean => nereus_stats::mean(selected)?,
        Statistic::Percentile(p) => nereus_stats::percentile_sorted(sorted, p)?,
        Statistic::Max => nereus_stats::max(selected)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn june() -> MonthFilter {
        MonthFilter::from_option(Some(6)).unwrap()
    }

    #[test]
    fn statistic_labels() {
        assert_eq!(Statistic::Mean.to_string(), "mean");
        assert_eq!(Statistic::Percentile(10.0).to_string(), "p10");
        assert_eq!(Statistic::Percentile(99.5).to_string(), "p99.5");
        assert_eq!(Statistic::Max.to_string(), "max");
    }

    #[test]
    fn summarize_all() {
        let cycle = [1.0, 2.0, 3.0, 4.0, 5.0];
        let months = [1, 1, 2, 2, 3];
        let s = summarize(&cycle, &months, MonthFilter::All, &MULTI_VARIABLE_STATS).unwrap();
        assert_eq!(s.n_samples(), 5);
        assert_eq!(s.filter(), MonthFilter::All);
        assert_relative_eq!(s.get(Statistic::Mean).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.get(Statistic::Percentile(10.0)).unwrap(), 1.4, epsilon = 1e-12);
        assert_relative_eq!(s.get(Statistic::Percentile(50.0)).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.get(Statistic::Percentile(95.0)).unwrap(), 4.8, epsilon = 1e-12);
        assert_eq!(s.get(Statistic::Max).unwrap(), 5.0);
    }

    #[test]
    fn summarize_month_filter() {
        let cycle = [1.0, 2.0, 10.0, 20.0];
        let months = [5, 5, 6, 6];
        let s = summarize(&cycle, &months, june(), &[Statistic::Mean, Statistic::Max]).unwrap();
        assert_eq!(s.n_samples(), 2);
        assert_eq!(s.get(Statistic::Mean).unwrap(), 15.0);
        assert_eq!(s.get(Statistic::Max).unwrap(), 20.0);
        assert!(s.get(Statistic::Percentile(50.0)).is_none());
    }

    #[test]
    fn values_keep_request_order() {
        let cycle = [1.0, 3.0];
        let months = [1, 1];
        let stats = [Statistic::Max, Statistic::Mean];
        let s = summarize(&cycle, &months, MonthFilter::All, &stats).unwrap();
        assert_eq!(s.values(), &[(Statistic::Max, 3.0), (Statistic::Mean, 2.0)]);
    }

    #[test]
    fn month_without_samples_is_insufficient() {
        let cycle = [1.0, 2.0];
        let months = [1, 2];
        assert_eq!(
            summarize(&cycle, &months, june(), &SINGLE_VARIABLE_STATS).unwrap_err(),
            WindowError::InsufficientData { month: 6 }
        );
    }

    #[test]
    fn empty_cycle_unfiltered() {
        assert_eq!(
            summarize(&[], &[], MonthFilter::All, &SINGLE_VARIABLE_STATS).unwrap_err(),
            WindowError::EmptySeries
        );
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            summarize(&[1.0, 2.0], &[1], MonthFilter::All, &[Statistic::Mean]),
            Err(WindowError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn bad_percentile() {
        assert_eq!(
            summarize(&[1.0], &[1], MonthFilter::All, &[Statistic::Percentile(150.0)])
                .unwrap_err(),
            WindowError::InvalidPercentile { p: 150.0 }
        );
    }

    #[test]
    fn typed_stats_match_summary() {
        // Worked example: W = [0, 0, 0, 4, 3, 2, 1, 0] h, op_duration = 12 h.
        let cycle: Vec<f64> = [0.0, 0.0, 0.0, 4.0, 3.0, 2.0, 1.0, 0.0]
            .iter()
            .map(|w| (w + 12.0) / 24.0)
            .collect();
        let months = [1u8; 8];
        let basic = WaitingStats::from_cycle(&cycle, &months, MonthFilter::All).unwrap();
        let ext = WaitingStatsExtended::from_cycle(&cycle, &months, MonthFilter::All).unwrap();
        assert_eq!(basic.mean, ext.mean);
        assert_eq!(basic.p10, ext.p10);
        assert_eq!(basic.p50, ext.p50);
        assert_eq!(basic.p90, ext.p90);
        assert_relative_eq!(ext.max, 16.0 / 24.0, epsilon = 1e-12);
    }

    #[test]
    fn typed_stats_serialize() {
        let stats = WaitingStats {
            mean: 1.5,
            p10: 0.5,
            p50: 1.0,
            p90: 3.0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"mean":1.5,"p10":0.5,"p50":1.0,"p90":3.0}"#);
    }
}
