//! Hours command: operable hours per year below each threshold.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use nereus_window::{OperableHours, operable_hours_per_year};

use crate::cli::HoursArgs;
use crate::config::NereusConfig;
use crate::{input, output};

#[derive(Serialize)]
struct HoursReport<'a> {
    var: &'a str,
    timestep_hours: f64,
    #[serde(flatten)]
    hours: OperableHours,
}

/// Count the hours per calendar year that the variable stays below each threshold.
pub fn run(args: HoursArgs) -> Result<()> {
    let _cmd = info_span!("hours").entered();
    let config = NereusConfig::load(&args.config)?;
    let hours = config
        .hours
        .as_ref()
        .context("missing [hours] section in config")?;

    let series = input::read_input(&config.io, std::slice::from_ref(&hours.var))?;
    let timestep = input::resolve_timestep(hours.timestep, &series)?;

    let result = operable_hours_per_year(
        series.column(&hours.var)?,
        &series.years(),
        &hours.thresholds,
        timestep,
    )
    .context("operable-hours computation failed")?;
    info!(
        n_years = result.years.len(),
        n_thresholds = result.thresholds.len(),
        "operable hours computed"
    );

    let report = HoursReport {
        var: &hours.var,
        timestep_hours: timestep,
        hours: result,
    };

    let out = args.output.as_deref().or(config.io.output.as_deref());
    output::emit_json(&report, out)
}
