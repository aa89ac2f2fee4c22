//! Wall-clock times within a single day and accumulated table time.

use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTES_PER_HOUR: u32 = 60;

/// Error for strings that are not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time (expected HH:MM): {0}")]
pub struct InvalidTime(String);

/// A wall-clock time of day, minute resolution.
///
/// Ordered by hour, then minute. Canonical text form is zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Creates a time, or `None` if the hour or minute is out of range.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }

    /// Time elapsed from `start` until `self`.
    ///
    /// Callers guarantee `start <= self`; events are replayed in time order.
    pub fn elapsed_since(self, start: Self) -> Span {
        debug_assert!(start <= self, "elapsed_since: {start} is after {self}");
        Span::from_minutes(
            self.minutes_since_midnight()
                .saturating_sub(start.minutes_since_midnight()),
        )
    }
}

/// Parses a two-character ASCII decimal field.
fn two_digits(field: &str) -> Option<u8> {
    match field.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

impl FromStr for Time {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = two_digits(hour).ok_or_else(invalid)?;
        let minute = two_digits(minute).ok_or_else(invalid)?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A length of occupied time, possibly longer than a day.
///
/// Renders as `HH:MM`; the hour field grows past 23 instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    minutes: u32,
}

impl Span {
    pub const ZERO: Self = Self { minutes: 0 };

    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub const fn from_hours_minutes(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours * MINUTES_PER_HOUR + minutes,
        }
    }

    /// Whole hours.
    pub const fn hours(self) -> u32 {
        self.minutes / MINUTES_PER_HOUR
    }

    /// Minutes past the last whole hour.
    pub const fn minutes(self) -> u32 {
        self.minutes % MINUTES_PER_HOUR
    }

    /// Hours charged for this span: any started hour counts as a full one.
    pub const fn billable_hours(self) -> u32 {
        if self.minutes() == 0 {
            self.hours()
        } else {
            self.hours() + 1
        }
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, rhs: Self) {
        self.minutes += rhs.minutes;
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for Span {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Time {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_formats_canonical_form() {
        let time = t("09:05");
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "09:05");
        assert_eq!(t("23:59").to_string(), "23:59");
        assert_eq!(t("00:00").to_string(), "00:00");
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in [
            "", "9:00", "09:0", "24:00", "09:60", "0900", "09-00", "09:00 ", " 09:00", "ab:cd",
            "+9:00", "09:+5", "09:00:00",
        ] {
            assert!(bad.parse::<Time>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn orders_by_hour_then_minute() {
        assert!(t("08:59") < t("09:00"));
        assert!(t("09:00") < t("09:01"));
        assert!(t("10:00") > t("09:59"));
        assert_eq!(t("12:30"), t("12:30"));
    }

    #[test]
    fn elapsed_borrows_an_hour_when_minutes_wrap() {
        let span = t("12:33").elapsed_since(t("09:54"));
        assert_eq!(span.hours(), 2);
        assert_eq!(span.minutes(), 39);

        let span = t("10:15").elapsed_since(t("10:15"));
        assert_eq!(span, Span::ZERO);
    }

    #[test]
    fn span_accumulates_with_minute_carry() {
        let mut total = Span::from_hours_minutes(2, 39);
        total += Span::from_hours_minutes(3, 19);
        assert_eq!(total.hours(), 5);
        assert_eq!(total.minutes(), 58);

        total += Span::from_minutes(2);
        assert_eq!(total.to_string(), "06:00");
    }

    #[test]
    fn span_renders_past_a_day() {
        let span = Span::from_hours_minutes(30, 7);
        assert_eq!(span.to_string(), "30:07");
    }

    #[test]
    fn billable_hours_round_partial_hours_up() {
        assert_eq!(Span::ZERO.billable_hours(), 0);
        assert_eq!(Span::from_minutes(1).billable_hours(), 1);
        assert_eq!(Span::from_hours_minutes(1, 0).billable_hours(), 1);
        assert_eq!(Span::from_hours_minutes(1, 1).billable_hours(), 2);
        assert_eq!(Span::from_hours_minutes(8, 1).billable_hours(), 9);
    }

    #[test]
    fn time_serde_uses_text_form() {
        let json = serde_json::to_string(&t("07:03")).unwrap();
        assert_eq!(json, "\"07:03\"");
        let parsed: Time = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t("07:03"));
        assert!(serde_json::from_str::<Time>("\"7:03\"").is_err());
    }
}
