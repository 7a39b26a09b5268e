//! High-level reader configuration and orchestration.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::netcdf_read;
use crate::parquet_read;
use crate::series::MetoceanSeries;

/// On-disk format of an input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Netcdf,
    Parquet,
}

impl InputFormat {
    /// Infers the format from a file extension (`.nc`, `.nc4`, `.netcdf`,
    /// `.parquet`, `.pq`).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("nc" | "nc4" | "netcdf") => Ok(Self::Netcdf),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            Some(other) => Err(IoError::UnsupportedFormat {
                reason: format!("extension '{other}' of {}", path.display()),
            }),
            None => Err(IoError::UnsupportedFormat {
                reason: format!("{} has no file extension", path.display()),
            }),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Netcdf => f.write_str("netcdf"),
            Self::Parquet => f.write_str("parquet"),
        }
    }
}

/// Configuration for reading a metocean series.
///
/// The [`Default`] looks for a time axis called `time` (or `valid_time`,
/// `datetime`, `timestamp`) and loads no variables; request them with
/// [`with_variables`](Self::with_variables).
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Aliases tried, in order, for the time axis.
    time_aliases: Vec<String>,
    /// Variables to load.
    variables: Vec<String>,
    /// Explicit format; inferred from the file extension when `None`.
    format: Option<InputFormat>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_aliases: vec![
                "time".into(),
                "valid_time".into(),
                "datetime".into(),
                "timestamp".into(),
            ],
            variables: Vec::new(),
            format: None,
        }
    }
}

impl ReaderConfig {
    /// Use exactly this name for the time axis.
    pub fn with_time_var(mut self, name: impl Into<String>) -> Self {
        self.time_aliases = vec![name.into()];
        self
    }

    /// Set the variables to load.
    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Force the input format instead of inferring it from the extension.
    pub fn with_format(mut self, format: Option<InputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn time_aliases(&self) -> &[String] {
        &self.time_aliases
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem found: no time
    /// alias, no variables, duplicate variables, or a variable that is also a
    /// time alias.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = crate::validate::ValidationCollector::new();
        if self.time_aliases.is_empty() {
            c.push("at least one time variable name is required");
        }
        if self.variables.is_empty() {
            c.push("at least one variable is required");
        }
        for (i, name) in self.variables.iter().enumerate() {
            if self.variables[..i].contains(name) {
                c.push(format!("variable '{name}' requested twice"));
            }
            if self.time_aliases.contains(name) {
                c.push(format!("variable '{name}' is the time axis"));
            }
        }
        c.finish()
    }
}

/// Read a series, dispatching on the configured or inferred format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the format cannot be inferred,
/// otherwise whatever [`read_netcdf`] or [`read_parquet`] return.
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<MetoceanSeries, IoError> {
    let format = match config.format {
        Some(f) => f,
        None => InputFormat::from_path(path)?,
    };
    debug!(path = %path.display(), %format, "reading series");
    match format {
        InputFormat::Netcdf => read_netcdf(path, config),
        InputFormat::Parquet => read_parquet(path, config),
    }
}

/// Read a series from a NetCDF file.
///
/// The time variable must be 1-D with CF `units` of the form
/// `"<unit> since <reference>"`. Every requested variable must be 1-D on the
/// same dimension as time. `_FillValue` entries become NaN.
///
/// # Errors
///
/// Returns [`IoError`] on missing variables, shape mismatches, undecodable
/// time axes, or validation problems.
pub fn read_netcdf(path: &Path, config: &ReaderConfig) -> Result<MetoceanSeries, IoError> {
    config.validate()?;

    let file = netcdf_read::open_file(path)?;

    let time_var = netcdf_read::resolve_alias(&file, &config.time_aliases).ok_or_else(|| {
        IoError::MissingVariable {
            name: config.time_aliases[0].clone(),
            path: path.to_path_buf(),
        }
    })?;
    let offsets = netcdf_read::read_1d_f64(&file, time_var, path)?;
    let units = netcdf_read::read_time_units(&file, time_var, path)?;
    let timestamps = netcdf_read::offsets_to_timestamps(units, &offsets)?;
    let time_dim = netcdf_read::dimension_name(&file, time_var);

    let mut columns = BTreeMap::new();
    for name in &config.variables {
        let values = netcdf_read::read_1d_f64(&file, name, path)?;
        let dim = netcdf_read::dimension_name(&file, name);
        if dim != time_dim {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "variable '{name}' is on dimension {dim:?}, time is on {time_dim:?}"
                ),
            });
        }
        columns.insert(name.clone(), values);
    }

    info!(
        path = %path.display(),
        n_samples = timestamps.len(),
        n_variables = columns.len(),
        "read netcdf series"
    );
    MetoceanSeries::new(path, timestamps, columns)
}

/// Read a series from a Parquet file.
///
/// The file must hold a timestamp column (any Arrow timestamp unit, or
/// Int64 epoch seconds) named by one of the time aliases, plus one Float64
/// or Float32 column per requested variable. Nulls become NaN.
///
/// # Errors
///
/// Returns [`IoError`] on missing columns, unsupported column types, or
/// validation problems.
pub fn read_parquet(path: &Path, config: &ReaderConfig) -> Result<MetoceanSeries, IoError> {
    config.validate()?;

    let batches = parquet_read::read_batches(path)?;
    let Some(first) = batches.first() else {
        return Err(IoError::Validation {
            count: 1,
            details: format!("{} contains no rows", path.display()),
        });
    };

    let time_name = config
        .time_aliases
        .iter()
        .find(|alias| first.schema().index_of(alias).is_ok())
        .ok_or_else(|| IoError::MissingVariable {
            name: config.time_aliases[0].clone(),
            path: path.to_path_buf(),
        })?;

    let time_idx = parquet_read::column_index(first, time_name, path)?;
    let var_idx = config
        .variables
        .iter()
        .map(|name| parquet_read::column_index(first, name, path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut timestamps = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); config.variables.len()];
    for batch in &batches {
        timestamps.extend(parquet_read::timestamp_values(
            batch.column(time_idx),
            time_name,
        )?);
        for ((out, &idx), name) in values.iter_mut().zip(&var_idx).zip(&config.variables) {
            out.extend(parquet_read::float_values(batch.column(idx), name)?);
        }
    }
    debug!(n_batches = batches.len(), "decoded parquet batches");

    let columns: BTreeMap<String, Vec<f64>> =
        config.variables.iter().cloned().zip(values).collect();

    info!(
        path = %path.display(),
        n_samples = timestamps.len(),
        n_variables = columns.len(),
        "read parquet series"
    );
    MetoceanSeries::new(path, timestamps, columns)
}
