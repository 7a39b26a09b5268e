//! # nereus-io
//!
//! Read metocean time series from NetCDF or Parquet files and export the
//! per-sample waiting-time signal to Parquet. Bridges external file formats
//! into the `&[f64]` slice-based APIs of the analysis crates.

mod error;
mod netcdf_read;
mod parquet_read;
mod parquet_write;
mod reader;
mod series;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{InputFormat, ReaderConfig, read_netcdf, read_parquet, read_series};
pub use series::MetoceanSeries;
pub use writer::{Compression, SignalColumns, WriterConfig, write_signal_parquet};
