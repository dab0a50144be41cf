//! # agenda-core
//!
//! Event lifecycle and filtering engine for the `agenda` terminal app:
//! the status state machine, date/time filters, the display-row to
//! stable-identity indirection, and the attendance/review consistency
//! rules. Pure library — no I/O, no clock: "now" and "today" are always
//! passed in by the caller.
//!
//! ## Modules
//!
//! - [`temporal`] — user input parsing, canonical stored form, display formatting
//! - [`model`] — `Event`, `EventStatus`, attendee/review records, draft/patch types
//! - [`store`] — `EventStore`: creation, merge-edits, attendance, reviews, auto-update
//! - [`filter`] — day/range/period/week/location filters and the composite column filter
//! - [`selection`] — sorted-table rendering and row-number → event-id resolution
//! - [`stats`] — frequency tables by category, month, and city
//! - [`error`] — recoverable error taxonomies

pub mod error;
pub mod filter;
pub mod model;
pub mod selection;
pub mod stats;
pub mod store;
pub mod temporal;

pub use error::{Result, SelectionError, StoreError};
pub use filter::{
    apply_column_filters, events_on_day, filter_by_date_range, filter_by_location,
    filter_by_period, filter_week_full, ColumnFilter, Period, TextField,
};
pub use model::{Attendee, Event, EventDraft, EventId, EventPatch, EventStatus, Review};
pub use selection::{EventTable, RowChoice, SelectionPolicy};
pub use stats::{aggregate, Statistics};
pub use store::EventStore;
