//! Incoming club events and the events the club generates in response.
//!
//! Both directions share one line format: `HH:MM <id> <body>`, where the
//! numeric id selects the event kind.

use std::fmt;

use serde::Serialize;

use crate::time::Time;
use crate::types::{ClientName, TableNumber};

/// What happened in an incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The client came in (id 1).
    Arrived,
    /// The client sat down at a table (id 2).
    SatDown(TableNumber),
    /// The client started waiting for a table (id 3).
    StartedWaiting,
    /// The client left (id 4).
    Left,
}

impl EventKind {
    /// Wire id of this kind.
    pub const fn id(self) -> u8 {
        match self {
            Self::Arrived => 1,
            Self::SatDown(_) => 2,
            Self::StartedWaiting => 3,
            Self::Left => 4,
        }
    }
}

/// One validated incoming event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub time: Time,
    pub client: ClientName,
    pub kind: EventKind,
}

impl InputEvent {
    pub const fn new(time: Time, client: ClientName, kind: EventKind) -> Self {
        Self { time, client, kind }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.kind.id(), self.client)?;
        if let EventKind::SatDown(table) = self.kind {
            write!(f, " {table}")?;
        }
        Ok(())
    }
}

/// An incoming event together with the literal text it was read from.
///
/// The transcript echoes `text` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLine {
    pub event: InputEvent,
    pub text: String,
}

impl EventLine {
    pub fn new(event: InputEvent, text: impl Into<String>) -> Self {
        Self {
            event,
            text: text.into(),
        }
    }
}

impl From<InputEvent> for EventLine {
    fn from(event: InputEvent) -> Self {
        let text = event.to_string();
        Self { event, text }
    }
}

/// A business rule an incoming event ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rejection {
    /// Arrival before opening time.
    NotOpenYet,
    /// Arrival of a client who is already inside.
    YouShallNotPass,
    /// Any action by a client who is not inside.
    ClientUnknown,
    /// Sitting down at an occupied table.
    PlaceIsBusy,
    /// Waiting while a table is free.
    ICanWaitNoLonger,
    /// Waiting while already seated.
    ClientHasAlreadySatDownAtTheTable,
    /// Waiting while already waiting.
    ClientIsAlreadyWaiting,
}

impl Rejection {
    /// The exact text written to the transcript.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotOpenYet => "NotOpenYet",
            Self::YouShallNotPass => "YouShallNotPass",
            Self::ClientUnknown => "ClientUnknown",
            Self::PlaceIsBusy => "PlaceIsBusy",
            Self::ICanWaitNoLonger => "ICanWaitNoLonger!",
            Self::ClientHasAlreadySatDownAtTheTable => "ClientHasAlreadySatDownAtTheTable!",
            Self::ClientIsAlreadyWaiting => "ClientIsAlreadyWaiting!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the club did in response to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The client left: at closing, or because the waiting room was full (id 11).
    ClientGoneAway { client: ClientName },
    /// A waiting client took a freed table (id 12).
    ClientSeated {
        client: ClientName,
        table: TableNumber,
    },
    /// The incoming event was rejected (id 13).
    Rejected { reason: Rejection },
}

impl Outcome {
    /// Wire id of this outcome.
    pub const fn id(&self) -> u8 {
        match self {
            Self::ClientGoneAway { .. } => 11,
            Self::ClientSeated { .. } => 12,
            Self::Rejected { .. } => 13,
        }
    }
}

/// An event generated by the club, timestamped like the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEvent {
    pub time: Time,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl OutgoingEvent {
    pub const fn new(time: Time, outcome: Outcome) -> Self {
        Self { time, outcome }
    }

    pub const fn rejected(time: Time, reason: Rejection) -> Self {
        Self::new(time, Outcome::Rejected { reason })
    }
}

impl fmt::Display for OutgoingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.time, self.outcome.id())?;
        match &self.outcome {
            Outcome::ClientGoneAway { client } => write!(f, "{client}"),
            Outcome::ClientSeated { client, table } => write!(f, "{client} {table}"),
            Outcome::Rejected { reason } => write!(f, "{reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Time {
        s.parse().unwrap()
    }

    fn name(s: &str) -> ClientName {
        ClientName::new(s).unwrap()
    }

    #[test]
    fn input_event_renders_canonical_line() {
        let arrived = InputEvent::new(t("08:48"), name("client1"), EventKind::Arrived);
        assert_eq!(arrived.to_string(), "08:48 1 client1");

        let sat = InputEvent::new(
            t("09:54"),
            name("client1"),
            EventKind::SatDown(TableNumber::new(1).unwrap()),
        );
        assert_eq!(sat.to_string(), "09:54 2 client1 1");

        let waiting = InputEvent::new(t("11:45"), name("client4"), EventKind::StartedWaiting);
        assert_eq!(waiting.to_string(), "11:45 3 client4");

        let left = InputEvent::new(t("12:33"), name("client1"), EventKind::Left);
        assert_eq!(left.to_string(), "12:33 4 client1");
    }

    #[test]
    fn event_line_from_event_uses_canonical_text() {
        let line = EventLine::from(InputEvent::new(t("10:00"), name("a"), EventKind::Left));
        assert_eq!(line.text, "10:00 4 a");
    }

    #[test]
    fn outgoing_events_render_with_wire_ids() {
        let gone = OutgoingEvent::new(
            t("19:00"),
            Outcome::ClientGoneAway {
                client: name("client3"),
            },
        );
        assert_eq!(gone.to_string(), "19:00 11 client3");

        let seated = OutgoingEvent::new(
            t("12:33"),
            Outcome::ClientSeated {
                client: name("client4"),
                table: TableNumber::new(1).unwrap(),
            },
        );
        assert_eq!(seated.to_string(), "12:33 12 client4 1");

        let rejected = OutgoingEvent::rejected(t("08:48"), Rejection::NotOpenYet);
        assert_eq!(rejected.to_string(), "08:48 13 NotOpenYet");
    }

    #[test]
    fn rejection_vocabulary_is_exact() {
        let all = [
            (Rejection::NotOpenYet, "NotOpenYet"),
            (Rejection::YouShallNotPass, "YouShallNotPass"),
            (Rejection::ClientUnknown, "ClientUnknown"),
            (Rejection::PlaceIsBusy, "PlaceIsBusy"),
            (Rejection::ICanWaitNoLonger, "ICanWaitNoLonger!"),
            (
                Rejection::ClientHasAlreadySatDownAtTheTable,
                "ClientHasAlreadySatDownAtTheTable!",
            ),
            (Rejection::ClientIsAlreadyWaiting, "ClientIsAlreadyWaiting!"),
        ];
        for (rejection, text) in all {
            assert_eq!(rejection.to_string(), text);
        }
    }

    #[test]
    fn outgoing_event_serializes_flat() {
        let event = OutgoingEvent::rejected(t("11:35"), Rejection::PlaceIsBusy);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"time":"11:35","outcome":"rejected","reason":"PlaceIsBusy"}"#
        );
    }
}
