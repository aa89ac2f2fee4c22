//! End-of-day report: transcript plus per-table totals.

use serde::Serialize;

use crate::ledger::TableSummary;
use crate::time::Time;

/// Everything a simulated day produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub opening: Time,
    pub closing: Time,
    /// Echoed input lines interleaved with generated events, then closing departures.
    pub transcript: Vec<String>,
    pub tables: Vec<TableSummary>,
}

impl DayReport {
    /// Renders the report in the club's plain-text output format.
    ///
    /// Opening time, transcript, closing time, then one
    /// `<table> <revenue> <HH:MM>` line per table. Every line ends with `\n`.
    pub fn render(&self) -> String {
        let lines: Vec<String> = std::iter::once(self.opening.to_string())
            .chain(self.transcript.iter().cloned())
            .chain(std::iter::once(self.closing.to_string()))
            .chain(self.tables.iter().map(ToString::to_string))
            .collect();

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Total revenue across all tables.
    pub fn total_revenue(&self) -> u64 {
        self.tables.iter().map(|t| t.revenue).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::time::Span;
    use crate::types::TableNumber;

    fn t(s: &str) -> Time {
        s.parse().unwrap()
    }

    fn sample() -> DayReport {
        DayReport {
            opening: t("09:00"),
            closing: t("19:00"),
            transcript: vec![
                "10:00 1 amy".to_string(),
                "10:01 2 amy 2".to_string(),
                "19:00 11 amy".to_string(),
            ],
            tables: vec![
                TableSummary {
                    table: TableNumber::new(1).unwrap(),
                    revenue: 0,
                    occupied: Span::ZERO,
                },
                TableSummary {
                    table: TableNumber::new(2).unwrap(),
                    revenue: 90,
                    occupied: Span::from_hours_minutes(8, 59),
                },
            ],
        }
    }

    #[test]
    fn renders_plain_text_layout() {
        assert_snapshot!(sample().render(), @r"
        09:00
        10:00 1 amy
        10:01 2 amy 2
        19:00 11 amy
        19:00
        1 0 00:00
        2 90 08:59
        ");
    }

    #[test]
    fn render_ends_every_line_with_newline() {
        let text = sample().render();
        assert!(text.ends_with("2 90 08:59\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn total_revenue_sums_tables() {
        assert_eq!(sample().total_revenue(), 90);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["opening"], "09:00");
        assert_eq!(json["tables"][1]["table"], 2);
        assert_eq!(json["tables"][1]["revenue"], 90);
        assert_eq!(json["tables"][1]["occupied"], "08:59");
        assert_eq!(json["transcript"][2], "19:00 11 amy");
    }
}
