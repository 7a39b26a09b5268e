//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use nereus_io::{Compression, InputFormat, ReaderConfig, WriterConfig};
use nereus_window::{MonthFilter, WindowConfig};

use crate::config::{IoConfig, WindowToml};

/// Parses an input format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<InputFormat> {
    match s.to_lowercase().as_str() {
        "netcdf" | "nc" => Ok(InputFormat::Netcdf),
        "parquet" => Ok(InputFormat::Parquet),
        other => bail!("unknown input format: {other:?}"),
    }
}

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Builds a [`ReaderConfig`] that loads `variables` from the configured input.
pub fn build_reader_config<S: AsRef<str>>(io: &IoConfig, variables: &[S]) -> Result<ReaderConfig> {
    let format = io.format.as_deref().map(parse_format).transpose()?;
    let mut cfg = ReaderConfig::default()
        .with_variables(variables.iter().map(|v| v.as_ref().to_string()))
        .with_format(format);
    if let Some(ref name) = io.time_var {
        cfg = cfg.with_time_var(name);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    let cfg = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`WindowConfig`] from the TOML window configuration.
///
/// `timestep` is the resolved sampling interval; `month` overrides
/// `[window].month` when set.
pub fn build_window_config(
    window: &WindowToml,
    timestep: f64,
    month: Option<u8>,
) -> Result<WindowConfig> {
    if window.vars.len() != window.thresholds.len() {
        bail!(
            "[window] has {} vars but {} thresholds",
            window.vars.len(),
            window.thresholds.len()
        );
    }
    let filter = MonthFilter::from_option(month.or(window.month))?;
    let cfg = WindowConfig::new(window.op_duration, timestep).with_month(filter);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_toml() -> WindowToml {
        WindowToml {
            vars: vec!["hs".into()],
            thresholds: vec![1.5],
            op_duration: 6.0,
            timestep: None,
            month: Some(3),
        }
    }

    #[test]
    fn formats() {
        assert_eq!(parse_format("NetCDF").unwrap(), InputFormat::Netcdf);
        assert_eq!(parse_format("parquet").unwrap(), InputFormat::Parquet);
        assert!(parse_format("csv").is_err());
    }

    #[test]
    fn compressions() {
        assert_eq!(parse_compression("none").unwrap(), Compression::None);
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert!(parse_compression("lz4").is_err());
    }

    #[test]
    fn reader_config_from_io() {
        let io = IoConfig {
            time_var: Some("valid_time".into()),
            format: Some("parquet".into()),
            ..IoConfig::default()
        };
        let cfg = build_reader_config(&io, &["hs", "wind"]).unwrap();
        assert_eq!(cfg.time_aliases(), &["valid_time"]);
        assert_eq!(cfg.variables(), &["hs", "wind"]);
    }

    #[test]
    fn reader_config_rejects_bad_format_and_empty_vars() {
        let io = IoConfig {
            format: Some("grib".into()),
            ..IoConfig::default()
        };
        assert!(build_reader_config(&io, &["hs"]).is_err());
        assert!(build_reader_config::<&str>(&IoConfig::default(), &[]).is_err());
    }

    #[test]
    fn window_config_month_override() {
        let cfg = build_window_config(&window_toml(), 1.0, None).unwrap();
        assert_eq!(cfg.month().month().map(|m| m.get()), Some(3));

        let cfg = build_window_config(&window_toml(), 1.0, Some(8)).unwrap();
        assert_eq!(cfg.month().month().map(|m| m.get()), Some(8));
        assert_eq!(cfg.window_length().unwrap(), 6);
    }

    #[test]
    fn window_config_rejects_mismatched_thresholds() {
        let mut w = window_toml();
        w.thresholds.push(10.0);
        assert!(build_window_config(&w, 1.0, None).is_err());
    }

    #[test]
    fn window_config_rejects_short_operation() {
        let mut w = window_toml();
        w.op_duration = 0.5;
        assert!(build_window_config(&w, 1.0, None).is_err());
    }
}
