//! Core domain logic for the computer club simulator.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing a day description into a validated configuration and event list
//! - Replaying the day: seating, the waiting queue, departures and billing
//! - Producing the transcript and per-table revenue report

pub mod config;
pub mod engine;
pub mod event;
pub mod ledger;
pub mod parse;
pub mod queue;
pub mod registry;
pub mod report;
pub mod time;
pub mod types;

pub use config::{ClubConfig, ConfigError, MAX_HOURLY_RATE, MAX_TABLES};
pub use engine::{Club, SimulationError, check_time_order, simulate};
pub use event::{EventKind, EventLine, InputEvent, Outcome, OutgoingEvent, Rejection};
pub use ledger::{Table, TableLedger, TableSummary};
pub use parse::{ClubDay, ParseError, parse_day, parse_day_bytes};
pub use queue::WaitingQueue;
pub use registry::{ClientRegistry, ClientState};
pub use report::DayReport;
pub use time::{InvalidTime, Span, Time};
pub use types::{ClientName, TableNumber, ValidationError};
