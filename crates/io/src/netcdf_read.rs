//! Low-level NetCDF extraction helpers.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use netcdf::AttributeValue;

use crate::error::IoError;

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Returns the first alias that names a variable in `file`.
pub(crate) fn resolve_alias<'a>(file: &netcdf::File, aliases: &'a [String]) -> Option<&'a str> {
    aliases
        .iter()
        .map(String::as_str)
        .find(|alias| file.variable(alias).is_some())
}

/// Read a 1-D `f64` variable, replacing `_FillValue` entries with NaN.
pub(crate) fn read_1d_f64(
    file: &netcdf::File,
    name: &str,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let var = file
        .variable(name)
        .ok_or_else(|| IoError::MissingVariable {
            name: name.to_string(),
            path: path.to_path_buf(),
        })?;

    let n_dims = var.dimensions().len();
    if n_dims != 1 {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} dimensions"),
            expected: 1,
            got: n_dims,
        });
    }

    let mut values = var.get_values::<f64, _>(..)?;
    if let Some(fill) = fill_value(&var) {
        for v in values.iter_mut().filter(|v| **v == fill) {
            *v = f64::NAN;
        }
    }
    Ok(values)
}

/// Name of the single dimension of a 1-D variable.
pub(crate) fn dimension_name(file: &netcdf::File, name: &str) -> Option<String> {
    let var = file.variable(name)?;
    match var.dimensions() {
        [dim] => Some(dim.name()),
        _ => None,
    }
}

fn fill_value(var: &netcdf::Variable<'_>) -> Option<f64> {
    match var.attribute_value("_FillValue")?.ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        _ => None,
    }
}

/// Time axis encoding: `<unit> since <epoch>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeUnits {
    /// Seconds per unit offset.
    pub seconds_per_unit: f64,
    /// Reference instant of offset zero.
    pub epoch: NaiveDateTime,
}

/// Read the `units` and optional `calendar` attributes of a time variable.
pub(crate) fn read_time_units(
    file: &netcdf::File,
    time_var: &str,
    path: &Path,
) -> Result<TimeUnits, IoError> {
    let var = file
        .variable(time_var)
        .ok_or_else(|| IoError::MissingVariable {
            name: time_var.to_string(),
            path: path.to_path_buf(),
        })?;

    let units: String = var
        .attribute_value("units")
        .ok_or_else(|| IoError::InvalidTime {
            reason: format!("time variable '{time_var}' has no 'units' attribute"),
        })?
        .map_err(|e| IoError::InvalidTime {
            reason: format!("failed to read 'units' attribute: {e}"),
        })?
        .try_into()
        .map_err(|e: netcdf::Error| IoError::InvalidTime {
            reason: format!("'units' attribute is not a string: {e}"),
        })?;

    let calendar = var
        .attribute_value("calendar")
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        });
    if let Some(cal) = calendar
        && !matches!(
            cal.to_ascii_lowercase().as_str(),
            "standard" | "gregorian" | "proleptic_gregorian"
        )
    {
        return Err(IoError::InvalidTime {
            reason: format!("unsupported calendar '{cal}'"),
        });
    }

    parse_time_units(&units)
}

/// Parse CF strings like `"hours since 1990-01-01 00:00:00"`.
pub(crate) fn parse_time_units(units: &str) -> Result<TimeUnits, IoError> {
    let invalid = || IoError::InvalidTime {
        reason: format!("unexpected time units format: '{units}'"),
    };

    let (unit, rest) = units.trim().split_once(' ').ok_or_else(invalid)?;
    let epoch = rest
        .trim_start()
        .strip_prefix("since ")
        .ok_or_else(invalid)?
        .trim()
        .trim_end_matches('Z')
        .trim_end_matches(" UTC");

    let seconds_per_unit = match unit.to_ascii_lowercase().as_str() {
        "seconds" | "second" | "secs" | "s" => 1.0,
        "minutes" | "minute" | "mins" | "min" => 60.0,
        "hours" | "hour" | "hrs" | "h" => 3600.0,
        "days" | "day" | "d" => 86_400.0,
        _ => return Err(invalid()),
    };

    let epoch = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(epoch, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(epoch, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| IoError::InvalidTime {
            reason: format!("failed to parse reference time '{epoch}'"),
        })?;

    Ok(TimeUnits {
        seconds_per_unit,
        epoch,
    })
}

/// Convert offsets from the epoch into timestamps, rounded to the millisecond.
pub(crate) fn offsets_to_timestamps(
    units: TimeUnits,
    offsets: &[f64],
) -> Result<Vec<NaiveDateTime>, IoError> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let millis = (offset * units.seconds_per_unit * 1000.0).round();
            if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
                return Err(IoError::InvalidTime {
                    reason: format!("time offset {offset} at index {i} is not representable"),
                });
            }
            units
                .epoch
                .checked_add_signed(TimeDelta::milliseconds(millis as i64))
                .ok_or_else(|| IoError::InvalidTime {
                    reason: format!("time offset {offset} at index {i} overflows"),
                })
        })
        .collect()
}
