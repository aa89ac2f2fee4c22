//! Input failures and their process exit codes.

use std::io;
use std::path::PathBuf;

use club_core::{ParseError, SimulationError};
use thiserror::Error;

/// Exit code for command-line usage errors.
pub const USAGE_EXIT_CODE: u8 = 1;

/// Exit code for failures outside the input catalog.
pub const UNEXPECTED_EXIT_CODE: u8 = 255;

/// A failure caused by the input file, reported to the user and mapped to an exit code.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("the input file must have a .txt extension")]
    WrongExtension { path: PathBuf },

    #[error("the input file cannot be opened")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("the events are not in time order")]
    Simulation(#[from] SimulationError),
}

impl RunError {
    /// What the failure is about: the file path, or the offending input line.
    pub fn subject(&self) -> String {
        match self {
            Self::WrongExtension { path } | Self::Unreadable { path, .. } => {
                path.display().to_string()
            }
            Self::Parse(err) => err.line().to_string(),
            Self::Simulation(err) => err.line().to_string(),
        }
    }

    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::WrongExtension { .. } => 2,
            Self::Unreadable { .. } => 3,
            Self::Parse(err) => match err {
                ParseError::InvalidTableCount(_) => 4,
                ParseError::InvalidWorkingHoursFormat(_) => 5,
                ParseError::InvalidOpeningTime(_) => 6,
                ParseError::InvalidClosingTime(_) => 7,
                ParseError::OpeningNotBeforeClosing(_) => 8,
                ParseError::InvalidHourlyRate(_) => 9,
                ParseError::MissingDelimiters(_) => 10,
                ParseError::TooFewDelimiters(_) => 11,
                ParseError::InvalidEventTime(_) => 12,
                ParseError::EventAfterClosing(_) => 13,
                ParseError::InvalidEventId(_) => 14,
                ParseError::MissingTableNumber(_) => 15,
                ParseError::InvalidClientName(_) => 16,
                ParseError::InvalidTableNumber(_) => 17,
                ParseError::TableOutOfRange(_) => 18,
            },
            Self::Simulation(SimulationError::NonMonotonicEventSequence { .. }) => 19,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_report_the_line() {
        let err = RunError::from(ParseError::InvalidEventId("09:00 7 amy".to_string()));
        assert_eq!(err.subject(), "09:00 7 amy");
        assert_eq!(err.exit_code(), 14);
        assert_eq!(err.to_string(), "the event id is incorrect");
    }

    #[test]
    fn time_order_failure_reports_the_line() {
        let err = RunError::from(SimulationError::NonMonotonicEventSequence {
            position: 3,
            line: "09:00 1 amy".to_string(),
        });
        assert_eq!(err.subject(), "09:00 1 amy");
        assert_eq!(err.exit_code(), 19);
    }

    #[test]
    fn file_failures_report_the_path() {
        let err = RunError::WrongExtension {
            path: PathBuf::from("day.csv"),
        };
        assert_eq!(err.subject(), "day.csv");
        assert_eq!(err.exit_code(), 2);
    }
}
