//! Tests for the time-driven status transition.

use agenda_core::{Event, EventStatus, EventStore};
use chrono::NaiveDate;

fn event(id: i64, datetime: &str, status: EventStatus) -> Event {
    Event {
        id,
        name: format!("event-{id}"),
        datetime: datetime.to_string(),
        location: "Surabaya".to_string(),
        address: String::new(),
        organizer: String::new(),
        description: String::new(),
        ticket_price: "free".to_string(),
        category: "Festival".to_string(),
        status,
        attendees: Vec::new(),
        reviews: Vec::new(),
    }
}

fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn past_scheduled_events_become_finished() {
    let mut store = EventStore::new(vec![
        event(1, "2025-01-01T10:00:00", EventStatus::Scheduled),
        event(2, "2025-06-01T10:00:00", EventStatus::Scheduled),
    ]);

    let changed = store.auto_update(noon(2025, 3, 1));

    assert!(changed);
    assert_eq!(store.get(1).unwrap().status, EventStatus::Finished);
    assert_eq!(store.get(2).unwrap().status, EventStatus::Scheduled);
}

#[test]
fn auto_update_is_idempotent() {
    let mut store = EventStore::new(vec![event(
        1,
        "2025-01-01T10:00:00",
        EventStatus::Scheduled,
    )]);
    let now = noon(2025, 3, 1);

    assert!(store.auto_update(now));
    assert!(!store.auto_update(now), "second call must report no change");
    assert_eq!(store.get(1).unwrap().status, EventStatus::Finished);
}

#[test]
fn manual_states_are_sticky() {
    let mut store = EventStore::new(vec![
        event(1, "2020-01-01T10:00:00", EventStatus::Postponed),
        event(2, "2020-01-01T10:00:00", EventStatus::Cancelled),
    ]);

    assert!(!store.auto_update(noon(2025, 3, 1)));
    assert_eq!(store.get(1).unwrap().status, EventStatus::Postponed);
    assert_eq!(store.get(2).unwrap().status, EventStatus::Cancelled);
}

#[test]
fn future_events_are_untouched() {
    let mut store = EventStore::new(vec![event(
        1,
        "2030-01-01T10:00:00",
        EventStatus::Scheduled,
    )]);
    assert!(!store.auto_update(noon(2025, 3, 1)));
    assert_eq!(store.get(1).unwrap().status, EventStatus::Scheduled);
}

#[test]
fn unparsable_timestamps_are_skipped() {
    let mut store = EventStore::new(vec![
        event(1, "garbage", EventStatus::Scheduled),
        event(2, "2020-01-01T10:00:00", EventStatus::Scheduled),
    ]);

    assert!(store.auto_update(noon(2025, 3, 1)));
    assert_eq!(store.get(1).unwrap().status, EventStatus::Scheduled);
    assert_eq!(store.get(2).unwrap().status, EventStatus::Finished);
}

#[test]
fn rescheduling_a_past_event_flips_back_on_next_update() {
    // Deliberate behavior: only postponed/cancelled are sticky. An
    // organizer can set a past event back to scheduled, and the next
    // clock-driven pass finishes it again.
    let mut store = EventStore::new(vec![event(
        1,
        "2020-01-01T10:00:00",
        EventStatus::Finished,
    )]);
    let now = noon(2025, 3, 1);

    store.set_status(1, EventStatus::Scheduled).unwrap();
    assert!(store.auto_update(now));
    assert_eq!(store.get(1).unwrap().status, EventStatus::Finished);
}
