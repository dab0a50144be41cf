//! The event store: owns the in-memory collection and exposes every
//! mutation as a method.
//!
//! Callers hold the store for the duration of a session, pass "now" in
//! explicitly, and persist the collection whenever a mutation succeeds
//! (the store itself never touches disk).

use chrono::NaiveDateTime;

use crate::error::{Result, StoreError};
use crate::model::{
    Attendee, Event, EventDraft, EventId, EventPatch, EventStatus, Review, DEFAULT_CATEGORY,
};
use crate::temporal;

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EventId) -> Result<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::UnknownEvent(id))
    }

    /// Next identity: one past the highest id in the collection. Monotonic
    /// within a data file and stable across deletes of non-maximal ids.
    fn next_id(&self) -> EventId {
        self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Create an event from a draft. Status is forced to `scheduled`, the
    /// attendee and review lists start empty, and a blank category falls
    /// back to [`DEFAULT_CATEGORY`].
    pub fn create(&mut self, draft: EventDraft) -> &Event {
        let category = if draft.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            draft.category
        };
        let event = Event {
            id: self.next_id(),
            name: draft.name,
            datetime: temporal::to_stored(draft.datetime),
            location: draft.location,
            address: draft.address,
            organizer: draft.organizer,
            description: draft.description,
            ticket_price: draft.ticket_price,
            category,
            status: EventStatus::Scheduled,
            attendees: Vec::new(),
            reviews: Vec::new(),
        };
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Merge a patch into an existing event. Absent fields keep their
    /// current value; the status changes only when the patch carries one.
    pub fn apply_patch(&mut self, id: EventId, patch: EventPatch) -> Result<&Event> {
        let event = self.get_mut(id)?;
        if let Some(name) = patch.name {
            event.name = name;
        }
        if let Some(dt) = patch.datetime {
            event.datetime = temporal::to_stored(dt);
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        if let Some(address) = patch.address {
            event.address = address;
        }
        if let Some(organizer) = patch.organizer {
            event.organizer = organizer;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(ticket_price) = patch.ticket_price {
            event.ticket_price = ticket_price;
        }
        if let Some(category) = patch.category {
            event.category = category;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
        Ok(event)
    }

    /// Hard delete. Confirmation policy belongs to the interaction layer.
    pub fn delete(&mut self, id: EventId) -> Result<Event> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::UnknownEvent(id))?;
        Ok(self.events.remove(pos))
    }

    /// Direct status assignment for the organizer status-management action.
    /// Deliberately bypasses any time-based logic; a past event set back to
    /// `scheduled` will flip to `finished` on the next [`Self::auto_update`].
    pub fn set_status(&mut self, id: EventId, status: EventStatus) -> Result<()> {
        self.get_mut(id)?.status = status;
        Ok(())
    }

    /// Mark `username` as attending. Rejects a case-insensitive duplicate.
    /// Attendance carries no status or time restriction of its own; the
    /// default picker already hides past events from visitors.
    pub fn attend(&mut self, id: EventId, username: &str, now: NaiveDateTime) -> Result<()> {
        let event = self.get_mut(id)?;
        if event.has_attendee(username) {
            return Err(StoreError::AlreadyAttending);
        }
        event.attendees.push(Attendee {
            username: username.to_string(),
            timestamp: temporal::to_stored(now),
        });
        Ok(())
    }

    /// Add a review. Only `finished` events accept reviews, one per user
    /// (case-insensitive), rating within 1..=5. Rejections leave no partial
    /// state behind.
    pub fn add_review(
        &mut self,
        id: EventId,
        username: &str,
        rating: u8,
        comment: &str,
        now: NaiveDateTime,
    ) -> Result<()> {
        let event = self.get_mut(id)?;
        if event.status != EventStatus::Finished {
            return Err(StoreError::NotFinished);
        }
        if event.has_review_by(username) {
            return Err(StoreError::AlreadyReviewed);
        }
        if !(1..=5).contains(&rating) {
            return Err(StoreError::InvalidRating(rating));
        }
        event.reviews.push(Review {
            username: username.to_string(),
            rating,
            comment: comment.to_string(),
            timestamp: temporal::to_stored(now),
        });
        Ok(())
    }

    /// Time-driven transition: every `scheduled` event strictly before
    /// `now` becomes `finished`. Returns whether anything changed so the
    /// caller knows to persist. Idempotent for a fixed `now`, independent
    /// of collection order, and silent on unparsable timestamps. Manual
    /// states (`postponed`, `cancelled`) are never touched.
    pub fn auto_update(&mut self, now: NaiveDateTime) -> bool {
        let mut changed = false;
        for event in &mut self.events {
            let Some(when) = temporal::parse_stored(&event.datetime) else {
                continue;
            };
            if when < now && event.status == EventStatus::Scheduled {
                event.status = EventStatus::Finished;
                changed = true;
            }
        }
        changed
    }

    /// Events `username` is attending, in collection order.
    pub fn attended_by(&self, username: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.has_attendee(username))
            .cloned()
            .collect()
    }
}
