//! Run command: simulate a day and print the report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use club_core::{DayReport, simulate};

use crate::Config;
use crate::config::OutputFormat;
use crate::error::RunError;

use super::util::load_day;

/// Runs the simulation for `path` and writes the report to `writer`.
pub fn run<W: Write>(
    writer: &mut W,
    path: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let day = load_day(path, config)?;
    let report = simulate(&day.config, &day.events).map_err(RunError::from)?;

    tracing::info!(
        tables = report.tables.len(),
        revenue = report.total_revenue(),
        "day complete"
    );

    write_report(writer, &report, format)
}

fn write_report<W: Write>(writer: &mut W, report: &DayReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writer
            .write_all(report.render().as_bytes())
            .context("failed to write report")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report).context("failed to serialize report")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
