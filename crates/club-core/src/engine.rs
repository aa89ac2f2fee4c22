//! Day simulation engine.
//!
//! Replays one business day from a time-ordered event list:
//!
//! 1. Check that event times never decrease (the only fatal condition)
//! 2. Apply each event to the table ledger, client registry and waiting queue,
//!    echoing the input line followed by at most one generated event
//! 3. At closing, send every remaining client away in ascending name order and
//!    bill their open table sessions
//!
//! Business rule violations never stop the day; they become `13` lines in the
//! transcript and leave state untouched.

use thiserror::Error;

use crate::config::ClubConfig;
use crate::event::{EventKind, EventLine, InputEvent, Outcome, OutgoingEvent, Rejection};
use crate::ledger::TableLedger;
use crate::queue::WaitingQueue;
use crate::registry::{ClientRegistry, ClientState};
use crate::report::DayReport;
use crate::time::Time;
use crate::types::{ClientName, TableNumber};

/// Fatal simulation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// An event is timestamped earlier than the one before it.
    #[error("event #{position} is out of time order: {line}")]
    NonMonotonicEventSequence {
        /// 1-based position of the offending event in the input.
        position: usize,
        /// The offending event's original text.
        line: String,
    },
}

impl SimulationError {
    /// Original text of the offending input line.
    pub fn line(&self) -> &str {
        match self {
            Self::NonMonotonicEventSequence { line, .. } => line,
        }
    }
}

/// Verifies that event times never decrease.
pub fn check_time_order(events: &[EventLine]) -> Result<(), SimulationError> {
    let offending = events
        .windows(2)
        .position(|pair| pair[1].event.time < pair[0].event.time);

    match offending {
        Some(index) => {
            let line = &events[index + 1];
            Err(SimulationError::NonMonotonicEventSequence {
                position: index + 2,
                line: line.text.clone(),
            })
        }
        None => Ok(()),
    }
}

/// Runs a full day and produces the transcript and per-table report.
///
/// Deterministic: the same configuration and events always yield the same report.
pub fn simulate(config: &ClubConfig, events: &[EventLine]) -> Result<DayReport, SimulationError> {
    check_time_order(events)?;

    let mut club = Club::new(config.clone());
    let mut transcript = Vec::with_capacity(events.len() * 2);

    for line in events {
        transcript.push(line.text.clone());
        transcript.extend(club.apply(&line.event).iter().map(ToString::to_string));
    }
    transcript.extend(club.close().iter().map(ToString::to_string));

    tracing::info!(
        events = events.len(),
        lines = transcript.len(),
        "day simulated"
    );

    Ok(DayReport {
        opening: config.opening(),
        closing: config.closing(),
        transcript,
        tables: club.tables().summaries(),
    })
}

/// Mutable state of the club during one simulated day.
#[derive(Debug, Clone)]
pub struct Club {
    config: ClubConfig,
    tables: TableLedger,
    clients: ClientRegistry,
    queue: WaitingQueue,
}

impl Club {
    pub fn new(config: ClubConfig) -> Self {
        Self {
            tables: TableLedger::new(config.table_count(), config.hourly_rate()),
            clients: ClientRegistry::new(),
            queue: WaitingQueue::new(config.table_count()),
            config,
        }
    }

    pub const fn config(&self) -> &ClubConfig {
        &self.config
    }

    pub const fn tables(&self) -> &TableLedger {
        &self.tables
    }

    pub const fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    pub const fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    /// Applies one incoming event, returning the events it generates.
    pub fn apply(&mut self, event: &InputEvent) -> Vec<OutgoingEvent> {
        let generated = match event.kind {
            EventKind::Arrived => self.arrive(event.time, &event.client),
            EventKind::SatDown(table) => self.sit_down(event.time, &event.client, table),
            EventKind::StartedWaiting => self.start_waiting(event.time, &event.client),
            EventKind::Left => self.leave(event.time, &event.client),
        };

        for out in &generated {
            if let Outcome::Rejected { reason } = out.outcome {
                tracing::debug!(client = %event.client, %reason, time = %event.time, "event rejected");
            }
        }
        generated
    }

    fn arrive(&mut self, time: Time, client: &ClientName) -> Vec<OutgoingEvent> {
        if time < self.config.opening() {
            return reject(time, Rejection::NotOpenYet);
        }
        if self.clients.contains(client) {
            return reject(time, Rejection::YouShallNotPass);
        }

        self.clients.set(client.clone(), ClientState::Present);
        tracing::debug!(%client, %time, "client arrived");
        Vec::new()
    }

    fn sit_down(&mut self, time: Time, client: &ClientName, table: TableNumber) -> Vec<OutgoingEvent> {
        let Some(state) = self.clients.state(client) else {
            return reject(time, Rejection::ClientUnknown);
        };
        if self.tables.is_busy(table) {
            return reject(time, Rejection::PlaceIsBusy);
        }

        match state {
            ClientState::Present => {}
            ClientState::Seated(previous) => {
                self.tables.release(previous, time);
                tracing::debug!(%client, from = %previous, to = %table, "client changed tables");
            }
            // A free table while clients wait is only reachable through this
            // path; the client gives up its place in the queue.
            ClientState::Waiting => {
                self.queue.remove(client);
            }
        }

        self.tables.occupy(table, time);
        self.clients.set(client.clone(), ClientState::Seated(table));
        tracing::debug!(%client, %table, %time, "client sat down");
        Vec::new()
    }

    fn start_waiting(&mut self, time: Time, client: &ClientName) -> Vec<OutgoingEvent> {
        let Some(state) = self.clients.state(client) else {
            return reject(time, Rejection::ClientUnknown);
        };
        if !self.tables.all_busy() {
            return reject(time, Rejection::ICanWaitNoLonger);
        }

        match state {
            ClientState::Present => match self.queue.push(client.clone()) {
                Ok(()) => {
                    self.clients.set(client.clone(), ClientState::Waiting);
                    tracing::debug!(%client, queued = self.queue.len(), "client is waiting");
                    Vec::new()
                }
                Err(client) => {
                    self.clients.remove(&client);
                    tracing::debug!(%client, "waiting room full, client went away");
                    vec![OutgoingEvent::new(time, Outcome::ClientGoneAway { client })]
                }
            },
            ClientState::Seated(_) => reject(time, Rejection::ClientHasAlreadySatDownAtTheTable),
            ClientState::Waiting => reject(time, Rejection::ClientIsAlreadyWaiting),
        }
    }

    fn leave(&mut self, time: Time, client: &ClientName) -> Vec<OutgoingEvent> {
        let Some(state) = self.clients.remove(client) else {
            return reject(time, Rejection::ClientUnknown);
        };
        tracing::debug!(%client, %time, "client left");

        match state {
            ClientState::Seated(table) => match self.queue.pop() {
                Some(next) => {
                    self.tables.hand_over(table, time);
                    self.clients.set(next.clone(), ClientState::Seated(table));
                    tracing::debug!(client = %next, %table, "waiting client seated");
                    vec![OutgoingEvent::new(
                        time,
                        Outcome::ClientSeated {
                            client: next,
                            table,
                        },
                    )]
                }
                None => {
                    self.tables.release(table, time);
                    Vec::new()
                }
            },
            ClientState::Waiting => {
                self.queue.remove(client);
                Vec::new()
            }
            ClientState::Present => Vec::new(),
        }
    }

    /// Sends every remaining client away at closing time, in ascending name order.
    ///
    /// Open table sessions are billed up to closing. Waiting clients are not
    /// seated, even when a table frees up.
    pub fn close(&mut self) -> Vec<OutgoingEvent> {
        let closing = self.config.closing();
        let remaining = self.clients.drain_sorted();
        tracing::debug!(remaining = remaining.len(), %closing, "closing the club");

        let mut generated = Vec::with_capacity(remaining.len());
        for (client, state) in remaining {
            if let ClientState::Seated(table) = state {
                self.tables.release(table, closing);
            }
            generated.push(OutgoingEvent::new(closing, Outcome::ClientGoneAway { client }));
        }
        while self.queue.pop().is_some() {}

        generated
    }
}

fn reject(time: Time, reason: Rejection) -> Vec<OutgoingEvent> {
    vec![OutgoingEvent::rejected(time, reason)]
}
