//! Check command: validate a day description without simulating it.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use club_core::check_time_order;

use crate::Config;
use crate::error::RunError;

use super::util::load_day;

pub fn run<W: Write>(writer: &mut W, path: &Path, config: &Config) -> Result<()> {
    let day = load_day(path, config)?;
    check_time_order(&day.events).map_err(RunError::from)?;

    writeln!(
        writer,
        "ok: {} events, {} tables",
        day.events.len(),
        day.config.table_count()
    )?;
    Ok(())
}
