//! Monthly command: waiting-time statistics for every calendar month.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use nereus_window::{MonthlyRow, WindowAnalysis};

use crate::cli::MonthlyArgs;
use crate::config::NereusConfig;
use crate::{convert, input, output};

#[derive(Serialize)]
struct MonthlyReport<'a> {
    vars: &'a [String],
    thresholds: &'a [f64],
    op_duration_hours: f64,
    timestep_hours: f64,
    window_len: usize,
    /// Twelve calendar months followed by the whole record.
    months: Vec<MonthlyRow>,
}

/// Run the weather-window pipeline and tabulate statistics per month.
pub fn run(args: MonthlyArgs) -> Result<()> {
    let _cmd = info_span!("monthly").entered();
    let config = NereusConfig::load(&args.config)?;
    let window = config
        .window
        .as_ref()
        .context("missing [window] section in config")?;

    let series = input::read_input(&config.io, &window.vars)?;
    let timestep = input::resolve_timestep(window.timestep, &series)?;
    // the table covers every month, so any configured month is ignored
    let window_cfg = convert::build_window_config(window, timestep, None)?;

    let months = series.months();
    let columns = series.columns(&window.vars)?;
    let analysis = WindowAnalysis::compute(&columns, &months, &window.thresholds, &window_cfg)
        .context("weather-window analysis failed")?;

    let rows = analysis.monthly_table()?;
    let empty = rows.iter().filter(|r| r.stats.is_none()).count();
    debug!(n_rows = rows.len(), n_empty = empty, "monthly table built");

    let report = MonthlyReport {
        vars: &window.vars,
        thresholds: &window.thresholds,
        op_duration_hours: window_cfg.op_duration(),
        timestep_hours: window_cfg.timestep(),
        window_len: analysis.window_len(),
        months: rows,
    };

    let out = args.output.as_deref().or(config.io.output.as_deref());
    output::emit_json(&report, out)
}
