//! High-level Parquet writer configuration and orchestration.

use std::path::Path;

use chrono::NaiveDateTime;
use parquet::file::properties::WriterProperties;
use tracing::info;

use crate::error::IoError;
use crate::parquet_write;
use crate::validate::ValidationCollector;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing the waiting-time signal to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    compression: Compression,
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Borrowed per-sample waiting-time signal, ready for export.
///
/// All four columns cover the same samples, `0..=max(H)` of the analysed series.
#[derive(Debug, Clone, Copy)]
pub struct SignalColumns<'a> {
    timestamps: &'a [NaiveDateTime],
    months: &'a [u8],
    waiting_hours: &'a [f64],
    cycle_days: &'a [f64],
}

impl<'a> SignalColumns<'a> {
    /// Bundles the signal columns after checking their lengths agree.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every column whose length
    /// differs from `waiting_hours`.
    pub fn new(
        timestamps: &'a [NaiveDateTime],
        months: &'a [u8],
        waiting_hours: &'a [f64],
        cycle_days: &'a [f64],
    ) -> Result<Self, IoError> {
        let n = waiting_hours.len();
        let mut c = ValidationCollector::new();
        for (name, len) in [
            ("time", timestamps.len()),
            ("month", months.len()),
            ("cycle_days", cycle_days.len()),
        ] {
            if len != n {
                c.push(format!("signal column '{name}' has {len} rows, expected {n}"));
            }
        }
        c.finish()?;

        Ok(Self {
            timestamps,
            months,
            waiting_hours,
            cycle_days,
        })
    }

    pub fn len(&self) -> usize {
        self.waiting_hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting_hours.is_empty()
    }

    pub fn timestamps(&self) -> &'a [NaiveDateTime] {
        self.timestamps
    }

    pub fn months(&self) -> &'a [u8] {
        self.months
    }

    pub fn waiting_hours(&self) -> &'a [f64] {
        self.waiting_hours
    }

    pub fn cycle_days(&self) -> &'a [f64] {
        self.cycle_days
    }
}

/// Write the waiting-time signal to a Parquet file.
///
/// Columns: `time` (millisecond timestamp), `month`, `waiting_hours`,
/// `cycle_days`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] if batch conversion or file I/O fails.
pub fn write_signal_parquet(
    path: &Path,
    signal: &SignalColumns<'_>,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let schema = parquet_write::build_schema();
    let props = WriterProperties::builder()
        .set_compression(config.compression.to_parquet()?)
        .set_max_row_group_size(config.row_group_size)
        .build();

    let batch = parquet_write::signal_to_record_batch(signal, &schema)?;
    parquet_write::write_batches(path, &[batch], &schema, props)?;

    info!(
        path = %path.display(),
        rows = signal.len(),
        compression = ?config.compression,
        "wrote waiting-time signal"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = WriterConfig::default();
        assert_eq!(config.compression(), Compression::Snappy);
        assert_eq!(config.row_group_size(), 1_000_000);
    }

    #[test]
    fn builder_methods() {
        let config = WriterConfig::default()
            .with_compression(Compression::Zstd)
            .with_row_group_size(500);
        assert_eq!(config.compression(), Compression::Zstd);
        assert_eq!(config.row_group_size(), 500);
    }

    #[test]
    fn validate_zero_row_group_size() {
        let err = WriterConfig::default()
            .with_row_group_size(0)
            .validate()
            .unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("row_group_size"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn signal_length_mismatch() {
        let err = SignalColumns::new(&[], &[1, 1], &[0.0, 0.0], &[0.1]).unwrap_err();
        assert!(matches!(err, IoError::Validation { count: 2, .. }));
    }

    #[test]
    fn signal_accessors() {
        let waiting = [1.0, 0.0];
        let cycle = [0.5, 0.45];
        let months = [7u8, 7];
        let t0 = chrono::NaiveDate::from_ymd_opt(2015, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let ts = nereus_calendar::regular_sequence(t0, 2, 1.0).unwrap();
        let signal = SignalColumns::new(&ts, &months, &waiting, &cycle).unwrap();
        assert_eq!(signal.len(), 2);
        assert!(!signal.is_empty());
        assert_eq!(signal.months(), &[7, 7]);
        assert_eq!(signal.cycle_days(), &[0.5, 0.45]);
    }
}
