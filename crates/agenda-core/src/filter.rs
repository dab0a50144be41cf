//! Pure filters over an event slice.
//!
//! Every function returns a fresh `Vec<Event>` in input order (display
//! sorting is the table layer's job) and skips events whose stored
//! timestamp does not parse instead of failing the whole filter.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::Event;

/// Recurring window selector for [`filter_by_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    /// Parse the numeric menu token (1=day, 2=week, 3=month).
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Day),
            "2" => Some(Self::Week),
            "3" => Some(Self::Month),
            _ => None,
        }
    }
}

/// Columns addressable by the composite filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Location,
    Address,
    Organizer,
    Category,
    Status,
    TicketPrice,
}

impl TextField {
    fn value<'a>(&self, event: &'a Event) -> &'a str {
        match self {
            Self::Name => &event.name,
            Self::Location => &event.location,
            Self::Address => &event.address,
            Self::Organizer => &event.organizer,
            Self::Category => &event.category,
            Self::Status => event.status.as_str(),
            Self::TicketPrice => &event.ticket_price,
        }
    }
}

/// One step of the composite filter. Steps are applied left to right as an
/// intersection: each narrows the previous result.
#[derive(Debug, Clone)]
pub enum ColumnFilter {
    /// Case-insensitive substring match on a single column. An empty
    /// keyword means "skip this column", not "match nothing".
    Text { field: TextField, keyword: String },
    /// Calendar-date equality.
    DateExact(NaiveDate),
    /// Inclusive on both ends.
    DateRange(NaiveDate, NaiveDate),
    /// Raw substring match against the stored timestamp text.
    DateSubstring(String),
}

/// Monday of the week containing `d`.
fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_monday()))
}

/// First day of the month after the one containing `d`.
fn next_month_start(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(d)
}

/// Events whose date component equals `day`.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.day() == Some(day))
        .cloned()
        .collect()
}

/// Events dated within `[start, end]`, inclusive on both ends.
pub fn filter_by_date_range(events: &[Event], start: NaiveDate, end: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.day().is_some_and(|d| start <= d && d <= end))
        .cloned()
        .collect()
}

/// Events within the recurring window containing `reference`.
///
/// Windows are half-open `[start, end)`: `Day` covers the reference date
/// itself, `Week` the Monday-started 7-day span, `Month` the calendar month
/// (rolling over December into January for the upper bound).
pub fn filter_by_period(events: &[Event], period: Period, reference: NaiveDate) -> Vec<Event> {
    let (start, end) = match period {
        Period::Day => (reference, reference + Duration::days(1)),
        Period::Week => {
            let start = week_start(reference);
            (start, start + Duration::days(7))
        }
        Period::Month => {
            let start = reference.with_day(1).unwrap_or(reference);
            (start, next_month_start(reference))
        }
    };
    events
        .iter()
        .filter(|e| e.day().is_some_and(|d| start <= d && d < end))
        .cloned()
        .collect()
}

/// Events within the full calendar week containing `reference`, together
/// with the resolved Monday and Sunday bounds for display.
pub fn filter_week_full(
    events: &[Event],
    reference: NaiveDate,
) -> (Vec<Event>, NaiveDate, NaiveDate) {
    let start = week_start(reference);
    let end = start + Duration::days(6);
    let matches = filter_by_date_range(events, start, end);
    (matches, start, end)
}

/// Case-insensitive substring match against location OR address.
pub fn filter_by_location(events: &[Event], substring: &str) -> Vec<Event> {
    let needle = substring.trim().to_lowercase();
    events
        .iter()
        .filter(|e| {
            e.location.to_lowercase().contains(&needle)
                || e.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Apply a sequence of column filters as a left-to-right intersection.
pub fn apply_column_filters(events: &[Event], filters: &[ColumnFilter]) -> Vec<Event> {
    let mut result: Vec<Event> = events.to_vec();
    for filter in filters {
        result = match filter {
            ColumnFilter::Text { field, keyword } => {
                let needle = keyword.trim().to_lowercase();
                if needle.is_empty() {
                    continue;
                }
                result
                    .into_iter()
                    .filter(|e| field.value(e).to_lowercase().contains(&needle))
                    .collect()
            }
            ColumnFilter::DateExact(day) => events_on_day(&result, *day),
            ColumnFilter::DateRange(start, end) => filter_by_date_range(&result, *start, *end),
            ColumnFilter::DateSubstring(keyword) => {
                let needle = keyword.trim().to_lowercase();
                result
                    .into_iter()
                    .filter(|e| e.datetime.to_lowercase().contains(&needle))
                    .collect()
            }
        };
    }
    result
}
