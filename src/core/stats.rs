//! Read-only reductions over the record list: overlapping window counts,
//! per-class and per-month histograms, and the top-offender ranking.

use chrono::{DateTime, Datelike, TimeZone};
use std::collections::HashMap;

use crate::core::filter::in_window;
use crate::models::{TardyRecord, Window};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Four overlapping counts sharing the window predicates of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounts {
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub total: usize,
}

pub fn count_by_window<Tz: TimeZone>(records: &[TardyRecord], now: &DateTime<Tz>) -> WindowCounts {
    let count = |w: Window| records.iter().filter(|r| in_window(r, w, now)).count();
    WindowCounts {
        today: count(Window::Day),
        this_week: count(Window::Week),
        this_month: count(Window::Month),
        total: records.len(),
    }
}

/// Group by class, sorted descending by count. Ties keep the order in which
/// each class was first encountered (the grouping is insertion-ordered and
/// the sort is stable).
pub fn histogram_by_class(records: &[TardyRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.class_name.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.class_name.as_str(), counts.len());
                counts.push((record.class_name.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count per calendar month irrespective of year. Always 12 slots, Jan..Dec,
/// zero slots present.
pub fn histogram_by_month<Tz: TimeZone>(records: &[TardyRecord], tz: &Tz) -> [usize; 12] {
    let mut slots = [0usize; 12];
    for record in records {
        if let Some(at) = record.datetime(tz) {
            slots[at.month0() as usize] += 1;
        }
    }
    slots
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    pub name: String,
    pub class_name: String,
    pub count: usize,
}

/// Group by nis and rank by frequency, truncated to `limit`. Name and class
/// come from the first record seen for each nis; ties keep first-grouped
/// order.
pub fn top_offenders(records: &[TardyRecord], limit: usize) -> Vec<Offender> {
    let mut offenders: Vec<Offender> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.nis.as_str()) {
            Some(&i) => offenders[i].count += 1,
            None => {
                index.insert(record.nis.as_str(), offenders.len());
                offenders.push(Offender {
                    name: record.name.clone(),
                    class_name: record.class_name.clone(),
                    count: 1,
                });
            }
        }
    }

    offenders.sort_by(|a, b| b.count.cmp(&a.count));
    offenders.truncate(limit);
    offenders
}
