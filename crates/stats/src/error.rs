//! Error types for the nereus-stats crate.

/// Error type for all fallible operations in the nereus-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when a statistic is requested over an empty sample.
    #[error("cannot compute a statistic over an empty sample")]
    EmptyInput,

    /// Returned when a percentile lies outside 0..=100 or is not finite.
    #[error("invalid percentile: {p} (must be within 0..=100)")]
    InvalidPercentile {
        /// The rejected percentile.
        p: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_input() {
        assert_eq!(
            StatsError::EmptyInput.to_string(),
            "cannot compute a statistic over an empty sample"
        );
    }

    #[test]
    fn error_invalid_percentile() {
        let err = StatsError::InvalidPercentile { p: 101.0 };
        assert_eq!(
            err.to_string(),
            "invalid percentile: 101 (must be within 0..=100)"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<StatsError>();
    }
}
