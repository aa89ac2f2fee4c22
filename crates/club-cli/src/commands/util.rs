//! Shared utilities for CLI commands.

use std::path::Path;

use club_core::{ClubDay, parse_day_bytes};

use crate::Config;
use crate::error::RunError;

/// Extension required of day description files.
const INPUT_EXTENSION: &str = "txt";

/// Reads and parses a day description file.
pub fn load_day(path: &Path, config: &Config) -> Result<ClubDay, RunError> {
    if config.require_txt_extension
        && path.extension().and_then(|ext| ext.to_str()) != Some(INPUT_EXTENSION)
    {
        return Err(RunError::WrongExtension {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| RunError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read day description");

    Ok(parse_day_bytes(&bytes)?)
}
