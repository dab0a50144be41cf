//! Frequency tables over the event collection.

use std::collections::HashMap;

use crate::model::{Event, DEFAULT_CATEGORY};

/// Display-ready counts: category and city descending by count with an
/// ascending-name tie-break, months ascending by `YYYY-MM` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub by_category: Vec<(String, usize)>,
    pub by_month: Vec<(String, usize)>,
    pub by_city: Vec<(String, usize)>,
}

/// Count events per category, per `YYYY-MM` bucket, and per location.
///
/// Events with unparsable timestamps are excluded from the month table
/// only; a blank location counts as `"Unknown"`, a blank category as the
/// default sentinel.
pub fn aggregate(events: &[Event]) -> Statistics {
    let mut by_category: HashMap<String, usize> = HashMap::new();
    let mut by_month: HashMap<String, usize> = HashMap::new();
    let mut by_city: HashMap<String, usize> = HashMap::new();

    for event in events {
        let category = if event.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            event.category.as_str()
        };
        *by_category.entry(category.to_string()).or_default() += 1;

        if let Some(when) = event.when() {
            let bucket = when.format("%Y-%m").to_string();
            *by_month.entry(bucket).or_default() += 1;
        }

        let city = if event.location.trim().is_empty() {
            "Unknown"
        } else {
            event.location.as_str()
        };
        *by_city.entry(city.to_string()).or_default() += 1;
    }

    Statistics {
        by_category: sort_by_count(by_category),
        by_month: sort_by_key(by_month),
        by_city: sort_by_count(by_city),
    }
}

fn sort_by_count(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

fn sort_by_key(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}
