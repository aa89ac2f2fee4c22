//! Parser for the club's day description.
//!
//! # Format
//!
//! ```text
//! 3                 <- number of tables
//! 09:00 19:00       <- opening and closing time
//! 10                <- hourly rate
//! 08:48 1 client1   <- events: time, id, client [, table for id 2]
//! 09:54 2 client1 1
//! ```
//!
//! Every failure carries the offending line. Time order between events is
//! not checked here; see [`crate::engine::check_time_order`].

use thiserror::Error;

use crate::config::{ClubConfig, ConfigError, MAX_HOURLY_RATE, MAX_TABLES};
use crate::event::{EventKind, EventLine, InputEvent};
use crate::time::Time;
use crate::types::{ClientName, TableNumber};

const DELIMITER: char = ' ';

/// Input description errors, each carrying the offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("the number of tables is incorrect")]
    InvalidTableCount(String),

    #[error("working hours must be two times separated by a space")]
    InvalidWorkingHoursFormat(String),

    #[error("the opening time format is incorrect")]
    InvalidOpeningTime(String),

    #[error("the closing time format is incorrect")]
    InvalidClosingTime(String),

    #[error("the opening time is not earlier than the closing time")]
    OpeningNotBeforeClosing(String),

    #[error("the hourly rate is incorrect")]
    InvalidHourlyRate(String),

    #[error("the event has no delimiters")]
    MissingDelimiters(String),

    #[error("the event has only one delimiter")]
    TooFewDelimiters(String),

    #[error("the event time format is incorrect")]
    InvalidEventTime(String),

    #[error("the event time is not earlier than the closing time")]
    EventAfterClosing(String),

    #[error("the event id is incorrect")]
    InvalidEventId(String),

    #[error("the table number is missing from a sit-down event")]
    MissingTableNumber(String),

    #[error("the client name is incorrect")]
    InvalidClientName(String),

    #[error("the table number is incorrect")]
    InvalidTableNumber(String),

    #[error("the table number exceeds the number of tables")]
    TableOutOfRange(String),
}

impl ParseError {
    /// The input line that failed to parse.
    pub fn line(&self) -> &str {
        match self {
            Self::InvalidTableCount(line)
            | Self::InvalidWorkingHoursFormat(line)
            | Self::InvalidOpeningTime(line)
            | Self::InvalidClosingTime(line)
            | Self::OpeningNotBeforeClosing(line)
            | Self::InvalidHourlyRate(line)
            | Self::MissingDelimiters(line)
            | Self::TooFewDelimiters(line)
            | Self::InvalidEventTime(line)
            | Self::EventAfterClosing(line)
            | Self::InvalidEventId(line)
            | Self::MissingTableNumber(line)
            | Self::InvalidClientName(line)
            | Self::InvalidTableNumber(line)
            | Self::TableOutOfRange(line) => line,
        }
    }
}

/// A parsed day description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubDay {
    pub config: ClubConfig,
    pub events: Vec<EventLine>,
}

/// Parses a day description from raw file contents.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so the line holding them
/// fails with that line's own error.
pub fn parse_day_bytes(bytes: &[u8]) -> Result<ClubDay, ParseError> {
    parse_day(&String::from_utf8_lossy(bytes))
}

/// Parses a complete day description.
pub fn parse_day(text: &str) -> Result<ClubDay, ParseError> {
    let mut lines = text.lines();

    let tables_line = lines.next().unwrap_or_default();
    let table_count = positive_number::<usize>(tables_line)
        .filter(|&count| count <= MAX_TABLES)
        .ok_or_else(|| ParseError::InvalidTableCount(tables_line.to_string()))?;

    let hours_line = lines.next().unwrap_or_default();
    let (opening, closing) = parse_working_hours(hours_line)?;

    let rate_line = lines.next().unwrap_or_default();
    let hourly_rate = positive_number::<u64>(rate_line)
        .filter(|&rate| rate <= MAX_HOURLY_RATE)
        .ok_or_else(|| ParseError::InvalidHourlyRate(rate_line.to_string()))?;

    let config = ClubConfig::new(table_count, opening, closing, hourly_rate)
        .map_err(|err| match err {
            ConfigError::NoTables | ConfigError::TooManyTables { .. } => {
                ParseError::InvalidTableCount(tables_line.to_string())
            }
            ConfigError::ZeroRate | ConfigError::RateTooHigh { .. } => {
                ParseError::InvalidHourlyRate(rate_line.to_string())
            }
            ConfigError::OpeningNotBeforeClosing { .. } => {
                ParseError::OpeningNotBeforeClosing(hours_line.to_string())
            }
        })?;

    let events = lines
        .map(|line| parse_event(line, &config))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        tables = table_count,
        %opening,
        %closing,
        hourly_rate,
        events = events.len(),
        "parsed day description"
    );

    Ok(ClubDay { config, events })
}

/// Parses a positive decimal integer with no sign and no leading zero.
fn positive_number<T: std::str::FromStr>(s: &str) -> Option<T> {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b'1'..=b'9') if bytes.all(|b| b.is_ascii_digit()) => s.parse().ok(),
        _ => None,
    }
}

fn parse_working_hours(line: &str) -> Result<(Time, Time), ParseError> {
    let (opening, closing) = line
        .split_once(DELIMITER)
        .ok_or_else(|| ParseError::InvalidWorkingHoursFormat(line.to_string()))?;

    let opening: Time = opening
        .parse()
        .map_err(|_| ParseError::InvalidOpeningTime(line.to_string()))?;
    let closing: Time = closing
        .parse()
        .map_err(|_| ParseError::InvalidClosingTime(line.to_string()))?;

    if opening >= closing {
        return Err(ParseError::OpeningNotBeforeClosing(line.to_string()));
    }
    Ok((opening, closing))
}

fn parse_event(line: &str, config: &ClubConfig) -> Result<EventLine, ParseError> {
    let err = |make: fn(String) -> ParseError| make(line.to_string());

    let (time, rest) = line
        .split_once(DELIMITER)
        .ok_or_else(|| err(ParseError::MissingDelimiters))?;
    let (id, body) = rest
        .split_once(DELIMITER)
        .ok_or_else(|| err(ParseError::TooFewDelimiters))?;

    let time: Time = time
        .parse()
        .map_err(|_| err(ParseError::InvalidEventTime))?;
    if time >= config.closing() {
        return Err(err(ParseError::EventAfterClosing));
    }

    let (client, table) = match id {
        "1" | "3" | "4" => (body, None),
        "2" => {
            let (client, table) = body
                .split_once(DELIMITER)
                .ok_or_else(|| err(ParseError::MissingTableNumber))?;
            (client, Some(table))
        }
        _ => return Err(err(ParseError::InvalidEventId)),
    };

    let client = ClientName::new(client).map_err(|_| err(ParseError::InvalidClientName))?;

    let kind = match (id, table) {
        (_, Some(table)) => EventKind::SatDown(parse_table(table, config).map_err(err)?),
        ("1", None) => EventKind::Arrived,
        ("3", None) => EventKind::StartedWaiting,
        _ => EventKind::Left,
    };

    Ok(EventLine::new(InputEvent::new(time, client, kind), line))
}

/// Parses a table number, returning the constructor of the matching error.
fn parse_table(s: &str, config: &ClubConfig) -> Result<TableNumber, fn(String) -> ParseError> {
    let table = positive_number::<usize>(s)
        .and_then(|n| TableNumber::new(n).ok())
        .ok_or(ParseError::InvalidTableNumber as fn(String) -> ParseError)?;
    if !config.has_table(table) {
        return Err(ParseError::TableOutOfRange);
    }
    Ok(table)
}
