//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, TimestampMillisecondArray, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;
use crate::writer::SignalColumns;

/// Column names of the exported waiting-time signal.
pub(crate) const SIGNAL_COLUMNS: [&str; 4] = ["time", "month", "waiting_hours", "cycle_days"];

/// Builds the Arrow schema for the waiting-time signal.
pub(crate) fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new(
            SIGNAL_COLUMNS[0],
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ),
        Field::new(SIGNAL_COLUMNS[1], DataType::UInt8, false),
        Field::new(SIGNAL_COLUMNS[2], DataType::Float64, false),
        Field::new(SIGNAL_COLUMNS[3], DataType::Float64, false),
    ])
}

/// Converts the signal into one Arrow [`RecordBatch`] matching [`build_schema`].
pub(crate) fn signal_to_record_batch(
    signal: &SignalColumns<'_>,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let millis: Vec<i64> = signal
        .timestamps()
        .iter()
        .map(|t| t.and_utc().timestamp_millis())
        .collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampMillisecondArray::from(millis)),
        Arc::new(UInt8Array::from(signal.months().to_vec())),
        Arc::new(Float64Array::from(signal.waiting_hours().to_vec())),
        Arc::new(Float64Array::from(signal.cycle_days().to_vec())),
    ];

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
