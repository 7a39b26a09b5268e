use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Nereus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NereusConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Weather-window settings, required by `window` and `monthly`.
    #[serde(default)]
    pub window: Option<WindowToml>,

    /// Operable-hours settings, required by `hours`.
    #[serde(default)]
    pub hours: Option<HoursToml>,
}

impl NereusConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    /// `"netcdf"` or `"parquet"`; inferred from the input extension when absent.
    #[serde(default)]
    pub format: Option<String>,
    /// Name of the time axis; the reader tries common names when absent.
    #[serde(default)]
    pub time_var: Option<String>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            format: None,
            time_var: None,
            output: None,
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    /// One to three variable names.
    pub vars: Vec<String>,
    /// One threshold per variable; samples must be strictly below.
    pub thresholds: Vec<f64>,
    /// Operation duration in hours.
    pub op_duration: f64,
    /// Sampling interval in hours; inferred from the timestamps when absent.
    #[serde(default)]
    pub timestep: Option<f64>,
    /// Restrict statistics to this calendar month (1-12).
    #[serde(default)]
    pub month: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoursToml {
    #[serde(default = "default_hours_var")]
    pub var: String,
    pub thresholds: Vec<f64>,
    #[serde(default)]
    pub timestep: Option<f64>,
}

fn default_hours_var() -> String {
    "hs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let cfg: NereusConfig = toml::from_str(
            r#"
            [io]
            input = "data/buoy.nc"
            format = "netcdf"
            time_var = "time"
            output = "out/window.json"
            compression = "zstd"

            [window]
            vars = ["hs", "wind"]
            thresholds = [1.5, 10.0]
            op_duration = 12.0
            timestep = 1.0
            month = 7

            [hours]
            thresholds = [1.0, 1.5, 2.0]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.io.input, Some(PathBuf::from("data/buoy.nc")));
        assert_eq!(cfg.io.compression, "zstd");
        assert_eq!(cfg.io.row_group_size, 1_000_000);

        let window = cfg.window.unwrap();
        assert_eq!(window.vars, vec!["hs", "wind"]);
        assert_eq!(window.op_duration, 12.0);
        assert_eq!(window.month, Some(7));

        let hours = cfg.hours.unwrap();
        assert_eq!(hours.var, "hs");
        assert_eq!(hours.thresholds.len(), 3);
        assert!(hours.timestep.is_none());
    }

    #[test]
    fn sections_are_optional() {
        let cfg: NereusConfig = toml::from_str("").unwrap();
        assert!(cfg.io.input.is_none());
        assert_eq!(cfg.io.compression, "snappy");
        assert!(cfg.window.is_none());
        assert!(cfg.hours.is_none());
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = toml::from_str::<NereusConfig>(
            r#"
            [window]
            vars = ["hs"]
            thresholds = [1.5]
            op_duration = 12.0
            duration = 3
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nereus.toml");
        std::fs::write(&path, "[hours]\nvar = \"wind\"\nthresholds = [8.0]\n").unwrap();

        let cfg = NereusConfig::load(&path).unwrap();
        assert_eq!(cfg.hours.unwrap().var, "wind");
    }

    #[test]
    fn load_missing_file() {
        let err = NereusConfig::load(Path::new("/nonexistent/nereus.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
