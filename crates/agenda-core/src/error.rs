//! Error types for store mutations and row selection.
//!
//! Every variant is recoverable: the interactive layer surfaces a message
//! and either re-prompts or returns to the previous menu. Nothing here is
//! ever fatal to the session.

use thiserror::Error;

use crate::model::EventId;

/// Business-rule rejections raised by [`crate::store::EventStore`] mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no event with id {0}")]
    UnknownEvent(EventId),

    #[error("already marked as attending this event")]
    AlreadyAttending,

    #[error("already reviewed this event")]
    AlreadyReviewed,

    #[error("reviews are only allowed once an event is finished")]
    NotFinished,

    #[error("rating {0} is out of range (1-5)")]
    InvalidRating(u8),
}

/// Rejections raised while resolving a table row selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection is not a number")]
    NotANumber,

    #[error("row {0} is not on the table")]
    OutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, StoreError>;
