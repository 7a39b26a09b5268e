//! Configuration for weather-window analysis.

use std::fmt;

use nereus_calendar::Month;

use crate::error::WindowError;
use crate::runs::window_length;

/// Calendar conditioning applied when summarising waiting times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthFilter {
    /// Use every sample up to the last hit.
    #[default]
    All,
    /// Use only samples whose timestamp falls in this month.
    Month(Month),
}

impl MonthFilter {
    /// Builds a filter from an optional 1-indexed month (`None` = all months).
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidMonth`] if the month is outside 1..=12.
    pub fn from_option(month: Option<u8>) -> Result<Self, WindowError> {
        match month {
            None => Ok(MonthFilter::All),
            Some(m) => Ok(MonthFilter::Month(Month::new(m)?)),
        }
    }

    /// Returns `true` if a sample with this month label passes the filter.
    #[inline]
    pub fn matches(self, label: u8) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => m.get() == label,
        }
    }

    /// Returns the selected month, if any.
    pub fn month(self) -> Option<Month> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(m) => Some(m),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => write!(f, "{m}"),
        }
    }
}

/// Configuration for weather-window analysis.
///
/// # Example
///
/// ```
/// use nereus_window::{MonthFilter, WindowConfig};
///
/// // 12-hour operation on an hourly series, June only.
/// let config = WindowConfig::new(12.0, 1.0)
///     .with_month(MonthFilter::from_option(Some(6)).unwrap());
/// assert_eq!(config.window_length().unwrap(), 12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    op_duration: f64,
    timestep: f64,
    month: MonthFilter,
}

impl WindowConfig {
    /// Creates a configuration for an operation of `op_duration` hours on a
    /// series sampled every `timestep` hours, summarised over all months.
    pub fn new(op_duration: f64, timestep: f64) -> Self {
        Self {
            op_duration,
            timestep,
            month: MonthFilter::All,
        }
    }

    /// Sets the month filter used by the summary.
    pub fn with_month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    /// Sets the sampling interval, in hours.
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    // --- Accessors ---

    /// Returns the required uninterrupted operation duration, in hours.
    pub fn op_duration(&self) -> f64 {
        self.op_duration
    }

    /// Returns the sampling interval, in hours.
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Returns the month filter.
    pub fn month(&self) -> MonthFilter {
        self.month
    }

    /// Number of samples spanned by one operation: `floor(op_duration / timestep)`.
    ///
    /// # Errors
    ///
    /// See [`window_length`].
    pub fn window_length(&self) -> Result<usize, WindowError> {
        window_length(self.op_duration, self.timestep)
    }

    /// Validates this configuration.
    ///
    /// Checks that the timestep is finite and positive and that the
    /// operation spans at least one sample.
    pub fn validate(&self) -> Result<(), WindowError> {
        self.window_length().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = WindowConfig::new(12.0, 1.0);
        assert_eq!(cfg.op_duration(), 12.0);
        assert_eq!(cfg.timestep(), 1.0);
        assert_eq!(cfg.month(), MonthFilter::All);
    }

    #[test]
    fn builder_chaining() {
        let june = MonthFilter::from_option(Some(6)).unwrap();
        let cfg = WindowConfig::new(24.0, 1.0)
            .with_timestep(3.0)
            .with_month(june);
        assert_eq!(cfg.timestep(), 3.0);
        assert_eq!(cfg.month(), june);
        assert_eq!(cfg.window_length().unwrap(), 8);
    }

    #[test]
    fn validate_ok() {
        assert!(WindowConfig::new(6.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_zero_duration() {
        assert!(matches!(
            WindowConfig::new(0.0, 1.0).validate(),
            Err(WindowError::InvalidWindowLength { .. })
        ));
    }

    #[test]
    fn validate_duration_shorter_than_timestep() {
        assert!(matches!(
            WindowConfig::new(2.0, 3.0).validate(),
            Err(WindowError::InvalidWindowLength { .. })
        ));
    }

    #[test]
    fn validate_bad_timestep() {
        // Zero
        assert!(matches!(
            WindowConfig::new(6.0, 0.0).validate(),
            Err(WindowError::InvalidTimestep { .. })
        ));
        // Negative
        assert!(WindowConfig::new(6.0, -1.0).validate().is_err());
        // NaN
        assert!(WindowConfig::new(6.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn month_filter_from_option() {
        assert_eq!(MonthFilter::from_option(None).unwrap(), MonthFilter::All);
        let f = MonthFilter::from_option(Some(12)).unwrap();
        assert_eq!(f.month().map(Month::get), Some(12));
        assert_eq!(
            MonthFilter::from_option(Some(13)).unwrap_err(),
            WindowError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn month_filter_matches() {
        let march = MonthFilter::from_option(Some(3)).unwrap();
        assert!(march.matches(3));
        assert!(!march.matches(4));
        assert!(MonthFilter::All.matches(4));
    }

    #[test]
    fn month_filter_display() {
        assert_eq!(MonthFilter::All.to_string(), "all");
        assert_eq!(MonthFilter::from_option(Some(1)).unwrap().to_string(), "Jan");
    }
}
