//! Error types for the nereus-calendar crate.

/// Error type for all fallible operations in the nereus-calendar crate.
///
/// Covers month validation and the checks that a timestamp axis is
/// strictly increasing and evenly spaced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a timestep cannot be inferred from fewer than two timestamps.
    #[error("need at least 2 timestamps to infer a timestep, got {n}")]
    TooFewTimestamps {
        /// Number of timestamps provided.
        n: usize,
    },

    /// Returned when a timestamp does not come strictly after its predecessor.
    #[error("timestamps not strictly increasing at index {index}")]
    NonIncreasing {
        /// Index of the offending timestamp.
        index: usize,
    },

    /// Returned when the spacing between two timestamps differs from the first step.
    #[error("uneven spacing at index {index}: expected {expected_secs} s, got {got_secs} s")]
    UnevenSpacing {
        /// Index of the timestamp ending the irregular step.
        index: usize,
        /// Spacing of the first step, in seconds.
        expected_secs: i64,
        /// Spacing found at `index`, in seconds.
        got_secs: i64,
    },

    /// Returned when a sequence step is non-finite, non-positive, or out of range.
    #[error("invalid step: {step_hours} hours")]
    InvalidStep {
        /// The rejected step, in hours.
        step_hours: f64,
    },
}
