use agenda_cli::auth::{hash_password, Role, User};
use agenda_cli::storage::{DataDir, Settings};
use agenda_core::{Event, EventStatus};
use tempfile::TempDir;

fn sample_event(id: i64, datetime: &str) -> Event {
    Event {
        id,
        name: format!("Event {id}"),
        datetime: datetime.to_string(),
        location: "Surabaya".to_string(),
        address: "Jl. Pemuda 1".to_string(),
        organizer: "Komunitas".to_string(),
        description: "desc".to_string(),
        ticket_price: "free".to_string(),
        category: "Festival".to_string(),
        status: EventStatus::Scheduled,
        attendees: Vec::new(),
        reviews: Vec::new(),
    }
}

#[test]
fn events_round_trip() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());

    let events = vec![
        sample_event(1, "2030-05-01T19:00:00"),
        sample_event(2, "2030-06-02T00:00:00"),
    ];
    data.save_events(&events).unwrap();

    assert_eq!(data.load_events(), events);
}

#[test]
fn missing_files_load_as_empty_defaults() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path().join("nowhere"));

    assert!(data.load_events().is_empty());
    assert!(data.load_users().is_empty());
    assert_eq!(data.load_settings(), Settings::default());
    assert_eq!(data.load_settings().lang, "en");
}

#[test]
fn malformed_record_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());
    data.save_events(&[sample_event(1, "2030-05-01T19:00:00")])
        .unwrap();

    let path = dir.path().join("events.json");
    let raw = std::fs::read_to_string(&path).unwrap();
    let mut values: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    values.push(serde_json::json!({"id": "not-a-number"}));
    std::fs::write(&path, serde_json::to_string_pretty(&values).unwrap()).unwrap();

    let loaded = data.load_events();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1);
}

#[test]
fn undecodable_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());
    std::fs::write(dir.path().join("events.json"), "{ not json").unwrap();

    assert!(data.load_events().is_empty());
}

#[test]
fn users_round_trip() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());

    let users = vec![User {
        username: "budi".to_string(),
        password: hash_password("rahasia"),
        role: Role::Organizer,
    }];
    data.save_users(&users).unwrap();

    assert_eq!(data.load_users(), users);
}

#[test]
fn settings_round_trip() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());

    let settings = Settings {
        lang: "id".to_string(),
        user_location: "Malang".to_string(),
    };
    data.save_settings(&settings).unwrap();

    assert_eq!(data.load_settings(), settings);
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());
    std::fs::write(dir.path().join("settings.json"), "[]").unwrap();

    assert_eq!(data.load_settings(), Settings::default());
}

#[test]
fn attendee_and_review_arrays_survive_round_trip() {
    let dir = TempDir::new().unwrap();
    let data = DataDir::new(dir.path());

    let mut event = sample_event(7, "2024-01-01T10:00:00");
    event.status = EventStatus::Finished;
    event.attendees.push(agenda_core::Attendee {
        username: "sari".to_string(),
        timestamp: "2023-12-30T08:00:00".to_string(),
    });
    event.reviews.push(agenda_core::Review {
        username: "sari".to_string(),
        rating: 5,
        comment: "bagus".to_string(),
        timestamp: "2024-01-02T09:00:00".to_string(),
    });
    data.save_events(std::slice::from_ref(&event)).unwrap();

    assert_eq!(data.load_events(), vec![event]);
}
