//! Event record types as they are persisted and mutated.
//!
//! The `datetime` field stays a string in the model: the canonical stored
//! form is parsed on demand, and a malformed value survives load/display
//! verbatim instead of poisoning the whole collection. Filtering and
//! statistics simply skip records whose timestamp does not parse.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::temporal;

/// Stable, opaque event identity. Display row numbers change with sorting
/// and filtering; this never does.
pub type EventId = i64;

/// Category used when an organizer leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "OTHER";

/// Lifecycle status of an event.
///
/// `Scheduled` events whose time has passed are flipped to `Finished` by
/// [`crate::store::EventStore::auto_update`]. `Postponed` and `Cancelled`
/// are manual states and are never overridden by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Finished,
    Postponed,
    Cancelled,
}

impl EventStatus {
    /// Parse the numeric menu token used by the interactive status prompts
    /// (1=scheduled, 2=finished, 3=postponed, 4=cancelled). Any other token
    /// means "leave unchanged".
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Scheduled),
            "2" => Some(Self::Finished),
            "3" => Some(Self::Postponed),
            "4" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Finished => "finished",
            Self::Postponed => "postponed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user who marked intent to attend an event. At most one per
/// (event, username) pair, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub username: String,
    pub timestamp: String,
}

/// A post-event rating and optional comment. At most one per
/// (event, username) pair, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    pub rating: u8,
    pub comment: String,
    pub timestamp: String,
}

/// A single scheduled occurrence with time, place, and organizer metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Canonical stored timestamp (`YYYY-MM-DDTHH:MM:SS`); may be malformed
    /// in hand-edited files, in which case it is carried verbatim.
    pub datetime: String,
    pub location: String,
    pub address: String,
    pub organizer: String,
    pub description: String,
    pub ticket_price: String,
    pub category: String,
    pub status: EventStatus,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Event {
    /// The event's timestamp, when the stored value parses.
    pub fn when(&self) -> Option<NaiveDateTime> {
        temporal::parse_stored(&self.datetime)
    }

    /// The calendar-date component of the timestamp, when it parses.
    pub fn day(&self) -> Option<NaiveDate> {
        self.when().map(|dt| dt.date())
    }

    /// Arithmetic mean of all review ratings, rounded to two decimal
    /// places. `None` when the event has no reviews — never zero.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / self.reviews.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }

    /// Whether `username` already has an attendance record here.
    pub fn has_attendee(&self, username: &str) -> bool {
        self.attendees
            .iter()
            .any(|a| a.username.trim().eq_ignore_ascii_case(username.trim()))
    }

    /// Whether `username` already has a review here.
    pub fn has_review_by(&self, username: &str) -> bool {
        self.reviews
            .iter()
            .any(|r| r.username.trim().eq_ignore_ascii_case(username.trim()))
    }
}

/// Input for [`crate::store::EventStore::create`]. The store fills in the
/// id, forces the status to `scheduled`, and defaults a blank category.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub datetime: NaiveDateTime,
    pub location: String,
    pub address: String,
    pub organizer: String,
    pub description: String,
    pub ticket_price: String,
    pub category: String,
}

/// A keep-current-value merge for [`crate::store::EventStore::apply_patch`]:
/// `None` leaves the existing field untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub datetime: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<String>,
    pub category: Option<String>,
    pub status: Option<EventStatus>,
}
