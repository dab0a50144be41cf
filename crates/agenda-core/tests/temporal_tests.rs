//! Tests for user input parsing and stored-timestamp formatting.

use agenda_core::temporal::{
    format_for_display, parse_date, parse_datetime, parse_stored, to_stored,
};
use chrono::{NaiveDate, Timelike};

#[test]
fn parses_full_datetime_input() {
    let dt = parse_datetime("2025-11-21 18:00").expect("valid datetime");
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 11, 21).unwrap());
    assert_eq!((dt.hour(), dt.minute()), (18, 0));
}

#[test]
fn bare_date_input_implies_midnight() {
    let dt = parse_datetime("2025-11-21").expect("valid date");
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert!(parse_datetime("  2025-11-21 18:00  ").is_some());
    assert!(parse_date(" 2025-11-21 ").is_some());
}

#[test]
fn malformed_input_is_rejected_not_panicked() {
    for bad in ["", "21/11/2025", "2025-13-01", "2025-11-21 25:00", "soon"] {
        assert!(parse_datetime(bad).is_none(), "accepted {bad:?}");
    }
    assert!(parse_date("2025-11-21 18:00").is_none(), "date parser must not take datetimes");
}

#[test]
fn stored_form_roundtrips() {
    let dt = parse_datetime("2026-01-05 09:30").unwrap();
    let stored = to_stored(dt);
    assert_eq!(stored, "2026-01-05T09:30:00");
    assert_eq!(parse_stored(&stored), Some(dt));
}

#[test]
fn stored_fractional_seconds_still_parse() {
    // Older data files carry microsecond suffixes.
    assert!(parse_stored("2025-11-21T18:00:00.123456").is_some());
}

#[test]
fn midnight_displays_as_date_only() {
    assert_eq!(format_for_display("2025-11-21T00:00:00"), "2025-11-21");
}

#[test]
fn non_midnight_displays_with_time() {
    assert_eq!(format_for_display("2025-11-21T18:05:00"), "2025-11-21 18:05");
}

#[test]
fn malformed_stored_value_is_echoed_verbatim() {
    assert_eq!(format_for_display("not-a-date"), "not-a-date");
    assert_eq!(format_for_display(""), "");
}
