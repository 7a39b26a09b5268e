//! JSON result output.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn emit_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize results")?;
    match path {
        Some(p) => {
            std::fs::write(p, &json)
                .with_context(|| format!("failed to write results: {}", p.display()))?;
            info!(path = %p.display(), "results written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
