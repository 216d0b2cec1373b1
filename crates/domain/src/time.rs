//! Forecast timestamp parsing and coarse day labels.
//!
//! Forecast rows are labelled with weekday, month and day only. Adapters that
//! have access to the viewer's locale provide their own [`DayLabeler`]; the
//! [`ChronoDayLabeler`] is the locale-free fallback used natively.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Turns a raw forecast timestamp into a display label.
pub trait DayLabeler {
    /// Label a raw timestamp. Unparsable input should be returned verbatim.
    fn label(&self, timestamp: &str) -> String;
}

/// English `Mon, Jan 6` labels computed with `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDayLabeler;

impl DayLabeler for ChronoDayLabeler {
    fn label(&self, timestamp: &str) -> String {
        const FORMAT: &str = "%a, %b %-d";
        match parse_forecast_time(timestamp) {
            Some(ForecastTime::Local(dt)) => dt.format(FORMAT).to_string(),
            Some(ForecastTime::Instant(dt)) => dt.with_timezone(&Local).format(FORMAT).to_string(),
            None => timestamp.to_string(),
        }
    }
}

/// A parsed forecast timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastTime {
    /// No offset given: a wall-clock time in the viewer's timezone.
    Local(NaiveDateTime),
    /// An absolute instant, to be shown in the viewer's timezone.
    Instant(DateTime<FixedOffset>),
}

/// Parse the timestamp shapes the forecast endpoint emits.
///
/// Accepts `2024-05-01T13:00`, `2024-05-01T13:00:00` and bare dates
/// (`2024-05-01`, read as local midnight) as local times, and RFC 3339 as an
/// instant.
#[must_use]
pub fn parse_forecast_time(timestamp: &str) -> Option<ForecastTime> {
    let ts = timestamp.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M") {
        return Some(ForecastTime::Local(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S") {
        return Some(ForecastTime::Local(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(ForecastTime::Instant(dt));
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .map(|date| ForecastTime::Local(date.and_time(NaiveTime::MIN)))
}
