//! ISO-8601 timestamp handling at seconds precision.
//!
//! Parsers receive a [`DateService`] at construction so the timestamp
//! dialect can be swapped without touching field extraction.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const ISO8601_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const ISO8601_SECONDS_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Stateless timestamp collaborator shared across parse calls.
pub trait DateService: Send + Sync {
    /// Parse `text` as ISO-8601 with no sub-second component.
    fn iso8601_seconds_parse(&self, text: &str) -> Option<DateTime<Utc>>;

    /// Render `value` in the form accepted by `iso8601_seconds_parse`.
    fn iso8601_seconds_format(&self, value: &DateTime<Utc>) -> String;
}

/// Default [`DateService`] backed by `chrono`.
///
/// Accepts `2014-01-01T00:00:00Z`, `2014-01-01T00:00:00+02:00` and the
/// zone-less `2014-01-01T00:00:00` (read as UTC, which is what Glance sends).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateService;

impl DateService for ChronoDateService {
    fn iso8601_seconds_parse(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Some(naive) = text.strip_suffix('Z') {
            return NaiveDateTime::parse_from_str(naive, ISO8601_SECONDS)
                .ok()
                .map(|dt| dt.and_utc());
        }
        if let Ok(dt) = DateTime::parse_from_str(text, ISO8601_SECONDS_OFFSET) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, ISO8601_SECONDS)
            .ok()
            .map(|dt| dt.and_utc())
    }

    fn iso8601_seconds_format(&self, value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
