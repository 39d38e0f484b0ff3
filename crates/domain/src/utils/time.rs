//! Backend timestamp parsing
//!
//! The backend mixes RFC 3339 timestamps (server-generated records) with the
//! minute-precision `YYYY-MM-DDTHH:MM` strings produced by datetime-local
//! inputs (user-entered dates echoed back). Naive forms are read as local
//! time, matching what the user typed.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a backend timestamp into local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}

/// Local calendar day of a backend timestamp.
pub fn local_date_of(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|at| at.date_naive())
}

/// Render a timestamp with a chrono format string, falling back to the raw
/// value when it does not parse.
pub fn format_timestamp(raw: &str, format: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |at| at.format(format).to_string())
}
