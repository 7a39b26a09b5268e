//! End-to-end weather-window pipeline.
//!
//! raw series → mask → hits → waiting-time signal → cycle time → statistics.

use std::iter;

use nereus_calendar::Month;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::{MonthFilter, WindowConfig};
use crate::error::WindowError;
use crate::mask::condition_mask;
use crate::runs::detect_hits;
use crate::summary::{Statistic, Summary, WaitingStats, WaitingStatsExtended, summarize};
use crate::waiting::{cycle_times, waiting_times};

/// Derived signals of one weather-window computation.
///
/// All signals cover sample indices `0..=max(H)`, where `H` is the hit set.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAnalysis {
    window_len: usize,
    hits: Vec<usize>,
    waiting_hours: Vec<f64>,
    cycle_days: Vec<f64>,
    months: Vec<u8>,
}

/// One row of the monthly waiting-time table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    /// Month abbreviation (`"Jan"`, ...) or `"all"`.
    pub month: String,
    /// Number of samples before the last hit that fall in this month.
    pub n_samples: usize,
    /// Statistics in days, `None` when the month has no samples.
    pub stats: Option<WaitingStatsExtended>,
}

impl WindowAnalysis {
    /// Runs mask building, run detection and waiting-time reconstruction.
    ///
    /// # Arguments
    ///
    /// * `series` - One to three variable series of equal length.
    /// * `months` - 1-indexed calendar month of every sample.
    /// * `thresholds` - One threshold per series; samples must be strictly below.
    /// * `config` - Operation duration and timestep.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] if the inputs are inconsistent (arity,
    /// lengths, months outside 1..=12, empty series), if the window length
    /// is invalid, or [`WindowError::NoOperableWindowFound`] if the
    /// condition never holds for a full window.
    pub fn compute(
        series: &[&[f64]],
        months: &[u8],
        thresholds: &[f64],
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window_len = config.window_length()?;
        let mask = condition_mask(series, thresholds)?;

        if mask.is_empty() {
            return Err(WindowError::EmptySeries);
        }
        if months.len() != mask.len() {
            return Err(WindowError::DimensionMismatch {
                what: "month labels".to_string(),
                expected: mask.len(),
                got: months.len(),
            });
        }
        if let Some(&bad) = months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(WindowError::InvalidMonth { month: bad });
        }

        let hits = detect_hits(&mask, window_len)?;
        debug!(
            n_samples = mask.len(),
            window_len,
            n_feasible = mask.iter().filter(|&&m| m).count(),
            n_hits = hits.len(),
            "run detection complete"
        );

        let waiting_hours = waiting_times(&hits, config.timestep())?;
        let cycle_days = cycle_times(&waiting_hours, config.op_duration());
        let months = months[..waiting_hours.len()].to_vec();
        debug!(signal_len = waiting_hours.len(), "waiting-time signal built");

        Ok(Self {
            window_len,
            hits,
            waiting_hours,
            cycle_days,
            months,
        })
    }

    /// Number of samples spanned by one operation.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Ascending start indices of every operable window.
    pub fn hits(&self) -> &[usize] {
        &self.hits
    }

    /// Hours until the next operable window, per sample.
    pub fn waiting_hours(&self) -> &[f64] {
        &self.waiting_hours
    }

    /// Waiting time plus operation duration, in days, per sample.
    pub fn cycle_days(&self) -> &[f64] {
        &self.cycle_days
    }

    /// Calendar month of every sample covered by the signal.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Number of signal samples that pass `filter`.
    pub fn n_samples(&self, filter: MonthFilter) -> usize {
        self.months.iter().filter(|&&m| filter.matches(m)).count()
    }

    /// Computes arbitrary statistics over the cycle-time signal.
    ///
    /// # Errors
    ///
    /// See [`summarize`].
    pub fn summarize(
        &self,
        filter: MonthFilter,
        stats: &[Statistic],
    ) -> Result<Summary, WindowError> {
        summarize(&self.cycle_days, &self.months, filter, stats)
    }

    /// Mean, p10, p50 and p90 of the cycle time, in days.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InsufficientData`] if the month filter selects nothing.
    pub fn waiting_stats(&self, filter: MonthFilter) -> Result<WaitingStats, WindowError> {
        WaitingStats::from_cycle(&self.cycle_days, &self.months, filter)
    }

    /// Mean, p10, p50, p90, p95 and max of the cycle time, in days.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InsufficientData`] if the month filter selects nothing.
    pub fn waiting_stats_extended(
        &self,
        filter: MonthFilter,
    ) -> Result<WaitingStatsExtended, WindowError> {
        WaitingStatsExtended::from_cycle(&self.cycle_days, &self.months, filter)
    }

    /// Extended statistics for every month plus the whole record.
    ///
    /// Returns 13 rows: January through December, then `"all"`. Months
    /// with no samples before the last hit carry `stats: None`.
    ///
    /// # Errors
    ///
    /// Propagates any error other than [`WindowError::InsufficientData`].
    pub fn monthly_table(&self) -> Result<Vec<MonthlyRow>, WindowError> {
        let filters: Vec<MonthFilter> = Month::all()
            .map(MonthFilter::Month)
            .chain(iter::once(MonthFilter::All))
            .collect();

        filters
            .par_iter()
            .map(|&filter| {
                let stats = match self.waiting_stats_extended(filter) {
                    Ok(s) => Some(s),
                    Err(WindowError::InsufficientData { .. }) => None,
                    Err(e) => return Err(e),
                };
                Ok(MonthlyRow {
                    month: filter.to_string(),
                    n_samples: self.n_samples(filter),
                    stats,
                })
            })
            .collect()
    }
}

/// Weather-window statistics for a condition on one variable.
///
/// Returns mean, p10, p50 and p90 of the cycle time in days, restricted to
/// `config.month()`.
///
/// # Errors
///
/// See [`WindowAnalysis::compute`] and [`WindowAnalysis::waiting_stats`].
pub fn weather_window_length(
    values: &[f64],
    months: &[u8],
    threshold: f64,
    config: &WindowConfig,
) -> Result<WaitingStats, WindowError> {
    WindowAnalysis::compute(&[values], months, &[threshold], config)?.waiting_stats(config.month())
}

/// Weather-window statistics for up to three simultaneous conditions.
///
/// Returns mean, p10, p50, p90, p95 and max of the cycle time in days,
/// restricted to `config.month()`.
///
/// # Errors
///
/// See [`WindowAnalysis::compute`] and [`WindowAnalysis::waiting_stats_extended`].
pub fn weather_window_length_multi(
    series: &[&[f64]],
    months: &[u8],
    thresholds: &[f64],
    config: &WindowConfig,
) -> Result<WaitingStatsExtended, WindowError> {
    WindowAnalysis::compute(series, months, thresholds, config)?
        .waiting_stats_extended(config.month())
}
