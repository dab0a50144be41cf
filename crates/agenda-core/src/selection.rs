//! Display/selection indirection: the stable bridge between a sorted,
//! filtered table row and the event identity behind it.
//!
//! Tables are always rendered in ascending timestamp order, numbered from
//! row 1. A row number only ever indexes the currently displayed subset;
//! resolving it yields the event's stable id, never a position in the full
//! collection. Every interactive picker routes through [`EventTable`] so
//! the index/identity mismatch bug class cannot occur at call sites.

use chrono::NaiveDate;

use crate::error::SelectionError;
use crate::model::{Event, EventId};
use crate::temporal;

/// Which events a picker is allowed to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Hide events dated strictly before today. Used for default browsing,
    /// attendance, and review.
    HidePast,
    /// Show everything. Used for edit, delete, status changes, and
    /// advanced filter results.
    ShowAll,
}

/// Outcome of a selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChoice {
    /// `0` or empty input: unwind without effect.
    Cancel,
    Row(EventId),
}

/// One rendered row: the display cells plus the identity they stand for.
#[derive(Debug, Clone)]
struct TableRow {
    id: EventId,
    cells: Vec<String>,
}

/// A snapshot of the currently displayed, sorted, filtered subset.
#[derive(Debug, Clone)]
pub struct EventTable {
    rows: Vec<TableRow>,
}

impl EventTable {
    /// Build the table: sort by the stored timestamp (the canonical form
    /// sorts chronologically as text), apply the policy, snapshot cells.
    /// Under `HidePast` an event needs a parseable date to be compared, so
    /// malformed timestamps are excluded there; under `ShowAll` they stay
    /// on the table and render verbatim.
    pub fn build(events: &[Event], policy: SelectionPolicy, today: NaiveDate) -> Self {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by(|a, b| a.datetime.cmp(&b.datetime));

        let mut rows: Vec<TableRow> = sorted
            .into_iter()
            .filter(|e| match policy {
                SelectionPolicy::ShowAll => true,
                SelectionPolicy::HidePast => e.day().is_some_and(|d| d >= today),
            })
            .map(|e| TableRow {
                id: e.id,
                cells: display_cells(e),
            })
            .collect();
        for (i, row) in rows.iter_mut().enumerate() {
            row.cells[0] = (i + 1).to_string();
        }
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The stable id shown on 1-based `row`, if the row exists.
    pub fn row_id(&self, row: usize) -> Option<EventId> {
        if row == 0 {
            return None;
        }
        self.rows.get(row - 1).map(|r| r.id)
    }

    /// Interpret raw selection input. Empty or `"0"` cancels; anything
    /// non-numeric or off the table is an input error for the caller to
    /// surface and re-prompt on.
    pub fn resolve_input(&self, input: &str) -> Result<RowChoice, SelectionError> {
        let input = input.trim();
        if input.is_empty() || input == "0" {
            return Ok(RowChoice::Cancel);
        }
        let row: usize = input.parse().map_err(|_| SelectionError::NotANumber)?;
        self.row_id(row)
            .map(RowChoice::Row)
            .ok_or(SelectionError::OutOfRange(row))
    }

    /// Render the table as width-aligned plain text under the given column
    /// headers. Styling is the terminal layer's concern.
    pub fn render(&self, headers: &[&str]) -> String {
        let cols = headers.len();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().take(cols).enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header_line: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect();
        out.push_str(&header_line.join(" | "));
        out.push('\n');
        let total: usize = widths.iter().sum::<usize>() + 3 * (cols.saturating_sub(1));
        out.push_str(&"-".repeat(total));
        for row in &self.rows {
            out.push('\n');
            let line: Vec<String> = row
                .cells
                .iter()
                .take(cols)
                .enumerate()
                .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
                .collect();
            out.push_str(&line.join(" | "));
        }
        out
    }
}

/// Cells in table-column order. The first cell is the 1-based row number,
/// filled in once the final display order is known.
fn display_cells(event: &Event) -> Vec<String> {
    vec![
        String::new(),
        event.name.clone(),
        temporal::format_for_display(&event.datetime),
        event.location.clone(),
        event.address.clone(),
        event.organizer.clone(),
        event.category.clone(),
        event.status.to_string(),
        event.ticket_price.clone(),
        event.attendees.len().to_string(),
        event
            .average_rating()
            .map_or_else(|| "-".to_string(), |avg| format!("{avg}")),
    ]
}
