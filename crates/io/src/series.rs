//! Loaded metocean time series.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use nereus_calendar::{check_strictly_increasing, infer_timestep_hours, month_labels, year_labels};
use tracing::info;

use crate::error::IoError;
use crate::validate;

/// A regular time axis with one or more named `f64` variables on it.
///
/// Missing values are stored as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MetoceanSeries {
    source: PathBuf,
    timestamps: Vec<NaiveDateTime>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl MetoceanSeries {
    /// Creates a series after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the time axis is empty, a column
    /// length differs from the number of timestamps, or a column holds no
    /// finite value. Returns [`IoError::Calendar`] if the timestamps are not
    /// strictly increasing.
    pub fn new(
        source: impl Into<PathBuf>,
        timestamps: Vec<NaiveDateTime>,
        columns: BTreeMap<String, Vec<f64>>,
    ) -> Result<Self, IoError> {
        validate::validate_lengths(
            timestamps.len(),
            columns.iter().map(|(name, v)| (name.as_str(), v.len())),
        )
        .finish()?;
        for (name, values) in &columns {
            validate::validate_not_all_missing(name, values).finish()?;
        }
        check_strictly_increasing(&timestamps)?;

        for (name, values) in &columns {
            let n_missing = values.iter().filter(|v| v.is_nan()).count();
            if n_missing > 0 {
                info!(
                    variable = name.as_str(),
                    n_missing, "missing samples will be treated as not operable"
                );
            }
        }

        Ok(Self {
            source: source.into(),
            timestamps,
            columns,
        })
    }

    /// File the series was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Names of the loaded variables, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Calendar month (1..=12) of every sample.
    pub fn months(&self) -> Vec<u8> {
        month_labels(&self.timestamps)
    }

    /// Calendar year of every sample.
    pub fn years(&self) -> Vec<i32> {
        year_labels(&self.timestamps)
    }

    /// Sampling interval in hours, inferred from the timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Calendar`] if the series has fewer than two
    /// samples or is unevenly spaced.
    pub fn timestep_hours(&self) -> Result<f64, IoError> {
        Ok(infer_timestep_hours(&self.timestamps)?)
    }

    /// Values of one variable.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingVariable`] if the variable was not loaded.
    pub fn column(&self, name: &str) -> Result<&[f64], IoError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| IoError::MissingVariable {
                name: name.to_string(),
                path: self.source.clone(),
            })
    }

    /// Values of several variables, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingVariable`] for the first name not loaded.
    pub fn columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&[f64]>, IoError> {
        names.iter().map(|n| self.column(n.as_ref())).collect()
    }
}
