//! Error types for the nereus-window crate.

use nereus_calendar::CalendarError;
use nereus_stats::StatsError;

/// Error type for all fallible operations in the nereus-window crate.
///
/// Every variant is terminal for the call that produced it: no partial
/// results accompany an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when the number of thresholds differs from the number of
    /// variables, or when parallel series disagree in length.
    #[error("dimension mismatch: {what} expected {expected}, got {got}")]
    DimensionMismatch {
        /// What was being compared (e.g. `"thresholds"`).
        what: String,
        /// Expected count or length.
        expected: usize,
        /// Actual count or length.
        got: usize,
    },

    /// Returned when zero or more than three variables are combined.
    #[error("unsupported number of variables: {n_vars} (must be 1..=3)")]
    UnsupportedArity {
        /// Number of variables requested.
        n_vars: usize,
    },

    /// Returned when the operation duration spans less than one sample.
    #[error("invalid window length: {reason}")]
    InvalidWindowLength {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when no full-length window satisfies the condition anywhere
    /// in the series. This is a valid data outcome, not a fault.
    #[error("no operable window found in the series")]
    NoOperableWindowFound,

    /// Returned when a month filter selects no samples before the last hit.
    #[error("insufficient data: no samples in month {month} before the last operable window")]
    InsufficientData {
        /// The 1-indexed month that selected nothing.
        month: u8,
    },

    /// Returned when the sampling interval is non-finite or non-positive.
    #[error("invalid timestep: {timestep} (must be finite and > 0 hours)")]
    InvalidTimestep {
        /// The rejected timestep, in hours.
        timestep: f64,
    },

    /// Returned when a month filter or month label is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when the input series (or an unfiltered sample) is empty.
    #[error("input series is empty")]
    EmptySeries,

    /// Returned when a requested percentile lies outside 0..=100.
    #[error("invalid percentile: {p} (must be within 0..=100)")]
    InvalidPercentile {
        /// The rejected percentile.
        p: f64,
    },

    /// Wraps a calendar failure other than an invalid month.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<StatsError> for WindowError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::EmptyInput => WindowError::EmptySeries,
            StatsError::InvalidPercentile { p } => WindowError::InvalidPercentile { p },
        }
    }
}

impl From<CalendarError> for WindowError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidMonth { month } => WindowError::InvalidMonth { month },
            other => WindowError::Calendar {
                reason: other.to_string(),
            },
        }
    }
}
