//! Property-based tests for the filter engine and status transitions.
//!
//! These verify invariants that should hold for *any* event collection and
//! reference date, not just the examples in `filter_tests.rs`.

use agenda_core::{
    filter_by_date_range, filter_by_period, filter_week_full, Event, EventStatus, EventStore,
    Period,
};
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A calendar date in the 2024-2027 range. Day is capped at 28 to avoid
/// invalid month/day combos.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..=2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_status() -> impl Strategy<Value = EventStatus> {
    prop_oneof![
        Just(EventStatus::Scheduled),
        Just(EventStatus::Finished),
        Just(EventStatus::Postponed),
        Just(EventStatus::Cancelled),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    (0i64..1000, arb_date(), 0u32..24, 0u32..60, arb_status()).prop_map(
        |(id, date, hour, minute, status)| Event {
            id,
            name: format!("event-{id}"),
            datetime: format!("{}T{:02}:{:02}:00", date.format("%Y-%m-%d"), hour, minute),
            location: "Surabaya".to_string(),
            address: String::new(),
            organizer: String::new(),
            description: String::new(),
            ticket_price: "free".to_string(),
            category: "Festival".to_string(),
            status,
            attendees: Vec::new(),
            reviews: Vec::new(),
        },
    )
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    // Reassign ids positionally so they are unique within the collection.
    prop::collection::vec(arb_event(), 0..32).prop_map(|mut events| {
        for (i, event) in events.iter_mut().enumerate() {
            event.id = i as i64 + 1;
        }
        events
    })
}

// ---------------------------------------------------------------------------
// Property 1: Full-week bounds are always Monday..Sunday containing the
// reference date, for any weekday of the reference.
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn week_bounds_are_monday_to_sunday(reference in arb_date()) {
        let (_, start, end) = filter_week_full(&[], reference);
        prop_assert_eq!(start.weekday(), Weekday::Mon);
        prop_assert_eq!(end.weekday(), Weekday::Sun);
        prop_assert_eq!(end - start, chrono::Duration::days(6));
        prop_assert!(start <= reference && reference <= end);
    }
}

// ---------------------------------------------------------------------------
// Property 2: The week period filter and the full-week filter agree on
// membership (half-open [Mon, Mon+7) equals inclusive [Mon, Sun]).
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn week_period_agrees_with_full_week(events in arb_events(), reference in arb_date()) {
        let by_period: Vec<i64> = filter_by_period(&events, Period::Week, reference)
            .iter().map(|e| e.id).collect();
        let (full, _, _) = filter_week_full(&events, reference);
        let by_full: Vec<i64> = full.iter().map(|e| e.id).collect();
        prop_assert_eq!(by_period, by_full);
    }
}

// ---------------------------------------------------------------------------
// Property 3: The day period filter equals a singleton inclusive range.
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn day_period_agrees_with_singleton_range(events in arb_events(), reference in arb_date()) {
        let by_period: Vec<i64> = filter_by_period(&events, Period::Day, reference)
            .iter().map(|e| e.id).collect();
        let by_range: Vec<i64> = filter_by_date_range(&events, reference, reference)
            .iter().map(|e| e.id).collect();
        prop_assert_eq!(by_period, by_range);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Every event the month filter returns is dated in the
// reference month, and every skipped parseable event is not.
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn month_filter_is_exact(events in arb_events(), reference in arb_date()) {
        let matched = filter_by_period(&events, Period::Month, reference);
        let matched_ids: std::collections::HashSet<i64> =
            matched.iter().map(|e| e.id).collect();

        for event in &events {
            let Some(day) = event.day() else { continue };
            let in_month = day.year() == reference.year() && day.month() == reference.month();
            prop_assert_eq!(
                matched_ids.contains(&event.id),
                in_month,
                "event {} dated {} vs reference {}",
                event.id, day, reference
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: auto_update is idempotent and only ever moves
// scheduled -> finished.
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn auto_update_idempotent_and_monotone(events in arb_events(), now_date in arb_date()) {
        let now = now_date.and_hms_opt(12, 0, 0).unwrap();
        let before: Vec<EventStatus> = events.iter().map(|e| e.status).collect();

        let mut store = EventStore::new(events);
        store.auto_update(now);
        let changed_again = store.auto_update(now);
        prop_assert!(!changed_again, "second pass must be a no-op");

        // The store never reorders, so compare positionally.
        for (old_status, event) in before.iter().zip(store.events()) {
            if event.status != *old_status {
                prop_assert_eq!(*old_status, EventStatus::Scheduled);
                prop_assert_eq!(event.status, EventStatus::Finished);
                prop_assert!(event.when().unwrap() < now);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Filters never invent events — every result id exists in the
// input, and results preserve input order.
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn filters_are_subsequences(events in arb_events(), start in arb_date(), end in arb_date()) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let matched = filter_by_date_range(&events, start, end);

        let mut cursor = 0usize;
        for m in &matched {
            // Each match must appear in the remaining input, in order.
            let pos = events[cursor..].iter().position(|e| e == m);
            prop_assert!(pos.is_some(), "filter produced an event not in input order");
            cursor += pos.unwrap() + 1;
        }
    }
}
