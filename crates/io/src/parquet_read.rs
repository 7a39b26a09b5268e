//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Float32Type, Float64Type, Int64Type, TimeUnit,
    TimestampMicrosecondType, TimestampMillisecondType, TimestampNanosecondType,
    TimestampSecondType,
};
use chrono::{DateTime, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// Index of the column called `name` in the batch schema.
pub(crate) fn column_index(batch: &RecordBatch, name: &str, path: &Path) -> Result<usize, IoError> {
    batch
        .schema()
        .index_of(name)
        .map_err(|_| IoError::MissingVariable {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Decodes a timestamp column of any Arrow timestamp unit, or Int64 epoch seconds.
pub(crate) fn timestamp_values(
    array: &ArrayRef,
    name: &str,
) -> Result<Vec<NaiveDateTime>, IoError> {
    match array.data_type() {
        DataType::Timestamp(TimeUnit::Second, _) => {
            epoch_values::<TimestampSecondType>(array, 1, name)
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => {
            epoch_values::<TimestampMillisecondType>(array, 1_000, name)
        }
        DataType::Timestamp(TimeUnit::Microsecond, _) => {
            epoch_values::<TimestampMicrosecondType>(array, 1_000_000, name)
        }
        DataType::Timestamp(TimeUnit::Nanosecond, _) => {
            epoch_values::<TimestampNanosecondType>(array, 1_000_000_000, name)
        }
        DataType::Int64 => epoch_values::<Int64Type>(array, 1, name),
        other => Err(IoError::InvalidTime {
            reason: format!("column '{name}' has type {other}, expected a timestamp"),
        }),
    }
}

fn epoch_values<T>(
    array: &ArrayRef,
    ticks_per_second: i64,
    name: &str,
) -> Result<Vec<NaiveDateTime>, IoError>
where
    T: ArrowPrimitiveType<Native = i64>,
{
    let col = array.as_primitive::<T>();
    (0..col.len())
        .map(|i| {
            if col.is_null(i) {
                return Err(IoError::InvalidTime {
                    reason: format!("column '{name}' has a null timestamp at row {i}"),
                });
            }
            let ticks = col.value(i);
            let secs = ticks.div_euclid(ticks_per_second);
            let nanos = ticks.rem_euclid(ticks_per_second) * (1_000_000_000 / ticks_per_second);
            DateTime::from_timestamp(secs, nanos as u32)
                .map(|dt| dt.naive_utc())
                .ok_or_else(|| IoError::InvalidTime {
                    reason: format!("column '{name}' value {ticks} at row {i} is out of range"),
                })
        })
        .collect()
}

/// Decodes a Float64 or Float32 column; nulls become NaN.
pub(crate) fn float_values(array: &ArrayRef, name: &str) -> Result<Vec<f64>, IoError> {
    match array.data_type() {
        DataType::Float64 => {
            let col = array.as_primitive::<Float64Type>();
            Ok((0..col.len())
                .map(|i| if col.is_null(i) { f64::NAN } else { col.value(i) })
                .collect())
        }
        DataType::Float32 => {
            let col = array.as_primitive::<Float32Type>();
            Ok((0..col.len())
                .map(|i| {
                    if col.is_null(i) {
                        f64::NAN
                    } else {
                        f64::from(col.value(i))
                    }
                })
                .collect())
        }
        other => Err(IoError::Validation {
            count: 1,
            details: format!("column '{name}' has type {other}, expected Float64 or Float32"),
        }),
    }
}
