//! Window command: waiting-time statistics for one operation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use nereus_io::{SignalColumns, write_signal_parquet};
use nereus_window::{WindowAnalysis, WindowConfig};

use crate::cli::WindowArgs;
use crate::config::NereusConfig;
use crate::{convert, input, output};

/// JSON report of the `window` command.
#[derive(Serialize)]
struct WindowReport<'a> {
    vars: &'a [String],
    thresholds: &'a [f64],
    op_duration_hours: f64,
    timestep_hours: f64,
    window_len: usize,
    month: String,
    n_samples: usize,
    n_windows: usize,
    /// Cycle-time statistics in days.
    stats: serde_json::Value,
}

/// Run the weather-window pipeline and report waiting-time statistics.
pub fn run(args: WindowArgs) -> Result<()> {
    let _cmd = info_span!("window").entered();
    let config = NereusConfig::load(&args.config)?;
    let window = config
        .window
        .as_ref()
        .context("missing [window] section in config")?;

    let series = input::read_input(&config.io, &window.vars)?;
    let timestep = input::resolve_timestep(window.timestep, &series)?;
    let window_cfg = convert::build_window_config(window, timestep, args.month)?;

    let months = series.months();
    let columns = series.columns(&window.vars)?;
    let analysis = WindowAnalysis::compute(&columns, &months, &window.thresholds, &window_cfg)
        .context("weather-window analysis failed")?;
    info!(
        window_len = analysis.window_len(),
        n_windows = analysis.hits().len(),
        "operable windows found"
    );

    let filter = window_cfg.month();
    let stats = if window.vars.len() == 1 {
        serde_json::to_value(analysis.waiting_stats(filter)?)?
    } else {
        serde_json::to_value(analysis.waiting_stats_extended(filter)?)?
    };

    let report = WindowReport {
        vars: &window.vars,
        thresholds: &window.thresholds,
        op_duration_hours: window_cfg.op_duration(),
        timestep_hours: window_cfg.timestep(),
        window_len: analysis.window_len(),
        month: filter.to_string(),
        n_samples: analysis.n_samples(filter),
        n_windows: analysis.hits().len(),
        stats,
    };

    if let Some(ref path) = args.signal {
        write_signal(&config, &series, &analysis, &window_cfg, path)?;
    }

    let out = args.output.as_deref().or(config.io.output.as_deref());
    output::emit_json(&report, out)
}

fn write_signal(
    config: &NereusConfig,
    series: &nereus_io::MetoceanSeries,
    analysis: &WindowAnalysis,
    window_cfg: &WindowConfig,
    path: &std::path::Path,
) -> Result<()> {
    let n = analysis.waiting_hours().len();
    let signal = SignalColumns::new(
        &series.timestamps()[..n],
        analysis.months(),
        analysis.waiting_hours(),
        analysis.cycle_days(),
    )?;
    let writer_cfg = convert::build_writer_config(&config.io)?;
    info!(
        path = %path.display(),
        op_duration = window_cfg.op_duration(),
        "writing waiting-time signal"
    );
    write_signal_parquet(path, &signal, &writer_cfg)
        .with_context(|| format!("failed to write signal: {}", path.display()))
}
