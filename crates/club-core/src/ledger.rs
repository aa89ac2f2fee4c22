//! Per-table occupancy and billing.

use serde::Serialize;

use crate::time::{Span, Time};
use crate::types::TableNumber;

/// Occupancy state and running totals of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Start of the current session; `None` while the table is free.
    occupied_since: Option<Time>,
    occupied: Span,
    revenue: u64,
}

impl Table {
    /// A table is busy exactly when a session is open on it.
    pub const fn is_busy(&self) -> bool {
        self.occupied_since.is_some()
    }

    pub const fn occupied_since(&self) -> Option<Time> {
        self.occupied_since
    }

    /// Total occupied time over all closed sessions.
    pub const fn occupied(&self) -> Span {
        self.occupied
    }

    /// Revenue over all closed sessions.
    pub const fn revenue(&self) -> u64 {
        self.revenue
    }
}

/// Final totals for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub table: TableNumber,
    pub revenue: u64,
    pub occupied: Span,
}

impl std::fmt::Display for TableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.table, self.revenue, self.occupied)
    }
}

/// All tables of the club, indexed by [`TableNumber`].
///
/// Indexing with a table number outside `1..=table_count` panics; event
/// validation keeps table numbers in range.
#[derive(Debug, Clone)]
pub struct TableLedger {
    tables: Vec<Table>,
    hourly_rate: u64,
}

impl TableLedger {
    pub fn new(table_count: usize, hourly_rate: u64) -> Self {
        Self {
            tables: vec![Table::default(); table_count],
            hourly_rate,
        }
    }

    pub fn table(&self, table: TableNumber) -> &Table {
        &self.tables[table.index()]
    }

    pub fn is_busy(&self, table: TableNumber) -> bool {
        self.table(table).is_busy()
    }

    pub fn all_busy(&self) -> bool {
        self.tables.iter().all(Table::is_busy)
    }

    pub fn busy_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_busy()).count()
    }

    /// Opens a session on a free table.
    pub fn occupy(&mut self, table: TableNumber, since: Time) {
        let slot = &mut self.tables[table.index()];
        debug_assert!(!slot.is_busy(), "table {table} is already busy");
        slot.occupied_since = Some(since);
    }

    /// Closes the open session on `table` at `stop`, billing it.
    ///
    /// The session's span is added to the table's occupied time and charged
    /// per started hour. The table is free afterwards. Returns the session
    /// span, or `None` if the table was already free.
    pub fn release(&mut self, table: TableNumber, stop: Time) -> Option<Span> {
        let rate = self.hourly_rate;
        let slot = &mut self.tables[table.index()];
        let start = slot.occupied_since.take()?;
        let session = stop.elapsed_since(start);
        let charge = u64::from(session.billable_hours()) * rate;

        slot.occupied += session;
        slot.revenue += charge;

        tracing::debug!(%table, %start, %stop, %session, charge, "table session closed");
        Some(session)
    }

    /// Closes the open session and immediately opens a new one at `at`.
    pub fn hand_over(&mut self, table: TableNumber, at: Time) {
        self.release(table, at);
        self.occupy(table, at);
    }

    pub fn summaries(&self) -> Vec<TableSummary> {
        (1..=self.tables.len())
            .zip(&self.tables)
            .filter_map(|(number, table)| {
                Some(TableSummary {
                    table: TableNumber::new(number).ok()?,
                    revenue: table.revenue,
                    occupied: table.occupied,
                })
            })
            .collect()
    }
}
