//! Fixed parameters of one simulated business day.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::Time;
use crate::types::TableNumber;

/// Largest supported number of tables.
pub const MAX_TABLES: usize = 10_000;

/// Largest supported hourly rate.
///
/// A table can bill at most one started hour per minute of the day, so with
/// [`MAX_TABLES`] tables the day's total revenue stays within `u64`.
pub const MAX_HOURLY_RATE: u64 = 1_000_000_000;

/// Club configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the club must have at least one table")]
    NoTables,

    #[error("too many tables: {count}")]
    TooManyTables { count: usize },

    #[error("hourly rate must be positive")]
    ZeroRate,

    #[error("hourly rate is too high: {rate}")]
    RateTooHigh { rate: u64 },

    #[error("opening time {opening} is not before closing time {closing}")]
    OpeningNotBeforeClosing { opening: Time, closing: Time },
}

/// Table count, working hours and hourly rate for the day.
///
/// Constructed once and read-only for the whole simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClubConfig")]
pub struct ClubConfig {
    table_count: usize,
    opening: Time,
    closing: Time,
    hourly_rate: u64,
}

#[derive(Deserialize)]
struct RawClubConfig {
    table_count: usize,
    opening: Time,
    closing: Time,
    hourly_rate: u64,
}

impl TryFrom<RawClubConfig> for ClubConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClubConfig) -> Result<Self, Self::Error> {
        Self::new(raw.table_count, raw.opening, raw.closing, raw.hourly_rate)
    }
}

impl ClubConfig {
    pub fn new(
        table_count: usize,
        opening: Time,
        closing: Time,
        hourly_rate: u64,
    ) -> Result<Self, ConfigError> {
        if table_count == 0 {
            return Err(ConfigError::NoTables);
        }
        if table_count > MAX_TABLES {
            return Err(ConfigError::TooManyTables { count: table_count });
        }
        if hourly_rate == 0 {
            return Err(ConfigError::ZeroRate);
        }
        if hourly_rate > MAX_HOURLY_RATE {
            return Err(ConfigError::RateTooHigh { rate: hourly_rate });
        }
        if opening >= closing {
            return Err(ConfigError::OpeningNotBeforeClosing { opening, closing });
        }
        Ok(Self {
            table_count,
            opening,
            closing,
            hourly_rate,
        })
    }

    pub const fn table_count(&self) -> usize {
        self.table_count
    }

    pub const fn opening(&self) -> Time {
        self.opening
    }

    pub const fn closing(&self) -> Time {
        self.closing
    }

    pub const fn hourly_rate(&self) -> u64 {
        self.hourly_rate
    }

    /// Returns true if `table` names one of this club's tables.
    pub const fn has_table(&self, table: TableNumber) -> bool {
        table.get() <= self.table_count
    }
}
