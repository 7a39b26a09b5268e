//! Input loading shared by the subcommands.

use anyhow::{Context, Result};
use tracing::{info, warn};

use nereus_io::{MetoceanSeries, read_series};

use crate::config::IoConfig;
use crate::convert;

/// Relative disagreement tolerated between a configured and an inferred timestep.
const TIMESTEP_TOLERANCE: f64 = 1e-6;

/// Reads `variables` from the configured input file.
pub fn read_input<S: AsRef<str>>(io: &IoConfig, variables: &[S]) -> Result<MetoceanSeries> {
    let input = io
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config"))?;
    let reader_cfg = convert::build_reader_config(io, variables)?;

    info!(path = %input.display(), "reading metocean series");
    let series = read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read input: {}", input.display()))?;
    info!(
        n_samples = series.len(),
        first = %series.timestamps()[0],
        "series loaded"
    );
    Ok(series)
}

/// Returns the configured timestep, or the one inferred from the timestamps.
///
/// A configured value that disagrees with the data is kept but logged.
pub fn resolve_timestep(configured: Option<f64>, series: &MetoceanSeries) -> Result<f64> {
    let inferred = series.timestep_hours();
    match (configured, inferred) {
        (Some(ts), Ok(data_ts)) => {
            if (ts - data_ts).abs() > TIMESTEP_TOLERANCE * data_ts {
                warn!(
                    configured = ts,
                    inferred = data_ts,
                    "configured timestep disagrees with the data spacing"
                );
            }
            Ok(ts)
        }
        (Some(ts), Err(e)) => {
            warn!(error = %e, "could not check configured timestep against the data");
            Ok(ts)
        }
        (None, inferred) => {
            let ts = inferred.context("failed to infer timestep; set it in the config")?;
            info!(timestep_hours = ts, "inferred timestep");
            Ok(ts)
        }
    }
}
