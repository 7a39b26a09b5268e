//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus helpers that check the
//! invariants of a loaded series.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that the time axis is non-empty and every column has its length.
pub(crate) fn validate_lengths<'a>(
    n_timestamps: usize,
    columns: impl IntoIterator<Item = (&'a str, usize)>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if n_timestamps == 0 {
        c.push("timestamps are empty");
    }
    for (name, len) in columns {
        if len != n_timestamps {
            c.push(format!(
                "column '{name}' has {len} values, expected {n_timestamps}"
            ));
        }
    }

    c
}

/// Check that a column holds at least one finite value.
pub(crate) fn validate_not_all_missing(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if !values.is_empty() && values.iter().all(|v| !v.is_finite()) {
        c.push(format!("column '{name}' contains only missing values"));
    }
    c
}
