//! Parsing and formatting of user-entered dates and stored timestamps.
//!
//! User input accepts `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD` (midnight
//! implied). Timestamps are persisted in a canonical, timezone-naive
//! ISO-8601 form (`YYYY-MM-DDTHH:MM:SS`) which also sorts chronologically
//! as a plain string.
//!
//! Every function here is pure and total: bad input yields `None` (or is
//! echoed back verbatim when formatting), never a panic.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

const INPUT_DATETIME: &str = "%Y-%m-%d %H:%M";
const INPUT_DATE: &str = "%Y-%m-%d";
const STORED: &str = "%Y-%m-%dT%H:%M:%S";
// Tolerates fractional seconds left behind by older data files.
const STORED_WITH_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse user input as a datetime. Accepts `YYYY-MM-DD HH:MM` or a bare
/// `YYYY-MM-DD` (interpreted as midnight). Anything else is `None`.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, INPUT_DATETIME) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(input, INPUT_DATE)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse user input as a calendar date (`YYYY-MM-DD` only).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, INPUT_DATE).ok()
}

/// Render a datetime in the canonical stored form.
pub fn to_stored(dt: NaiveDateTime) -> String {
    dt.format(STORED).to_string()
}

/// Parse a stored timestamp back into a datetime.
pub fn parse_stored(stored: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stored, STORED_WITH_FRACTION).ok()
}

/// Format a stored timestamp for display: `YYYY-MM-DD` when the time is
/// exactly midnight, `YYYY-MM-DD HH:MM` otherwise. A value that does not
/// parse is echoed back verbatim rather than crashing the renderer.
pub fn format_for_display(stored: &str) -> String {
    match parse_stored(stored) {
        Some(dt) if dt.hour() == 0 && dt.minute() == 0 => dt.format(INPUT_DATE).to_string(),
        Some(dt) => dt.format(INPUT_DATETIME).to_string(),
        None => stored.to_string(),
    }
}
