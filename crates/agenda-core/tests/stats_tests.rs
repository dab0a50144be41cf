//! Tests for the statistics frequency tables.

use agenda_core::{aggregate, Event, EventStatus};

fn event(id: i64, datetime: &str, location: &str, category: &str) -> Event {
    Event {
        id,
        name: format!("event-{id}"),
        datetime: datetime.to_string(),
        location: location.to_string(),
        address: String::new(),
        organizer: String::new(),
        description: String::new(),
        ticket_price: "free".to_string(),
        category: category.to_string(),
        status: EventStatus::Scheduled,
        attendees: Vec::new(),
        reviews: Vec::new(),
    }
}

#[test]
fn categories_sort_by_descending_count_then_name() {
    let events = vec![
        event(1, "2025-01-01T10:00:00", "Surabaya", "Tari"),
        event(2, "2025-01-02T10:00:00", "Surabaya", "Festival"),
        event(3, "2025-01-03T10:00:00", "Surabaya", "Festival"),
        event(4, "2025-01-04T10:00:00", "Surabaya", "Gamelan"),
    ];
    let stats = aggregate(&events);
    assert_eq!(
        stats.by_category,
        vec![
            ("Festival".to_string(), 2),
            ("Gamelan".to_string(), 1),
            ("Tari".to_string(), 1),
        ]
    );
}

#[test]
fn months_sort_ascending_and_skip_unparsable_timestamps() {
    let events = vec![
        event(1, "2025-12-01T10:00:00", "Surabaya", "Tari"),
        event(2, "2025-01-15T10:00:00", "Surabaya", "Tari"),
        event(3, "2025-01-20T10:00:00", "Surabaya", "Tari"),
        event(4, "someday", "Surabaya", "Tari"),
    ];
    let stats = aggregate(&events);
    assert_eq!(
        stats.by_month,
        vec![("2025-01".to_string(), 2), ("2025-12".to_string(), 1)]
    );
    // The unparsable event still counts everywhere else.
    assert_eq!(stats.by_category, vec![("Tari".to_string(), 4)]);
    assert_eq!(stats.by_city, vec![("Surabaya".to_string(), 4)]);
}

#[test]
fn blank_location_and_category_fall_back_to_sentinels() {
    let events = vec![
        event(1, "2025-01-01T10:00:00", "", ""),
        event(2, "2025-01-02T10:00:00", "  ", "Festival"),
    ];
    let stats = aggregate(&events);
    assert_eq!(stats.by_city, vec![("Unknown".to_string(), 2)]);
    assert_eq!(
        stats.by_category,
        vec![("Festival".to_string(), 1), ("OTHER".to_string(), 1)]
    );
}

#[test]
fn empty_collection_yields_empty_tables() {
    let stats = aggregate(&[]);
    assert!(stats.by_category.is_empty());
    assert!(stats.by_month.is_empty());
    assert!(stats.by_city.is_empty());
}
