//! Visibility filter: derives the visible subset of records from a time
//! window and an optional class selector. Output preserves the store's
//! newest-first order; nothing is re-sorted here.

use chrono::{DateTime, TimeZone};

use crate::models::{TardyRecord, Window};
use crate::utils::date::{same_day, same_month, week_start};

/// True when `record` falls inside `window` relative to the injected `now`.
/// All calendar arithmetic happens in `now`'s timezone.
pub fn in_window<Tz: TimeZone>(record: &TardyRecord, window: Window, now: &DateTime<Tz>) -> bool {
    if window == Window::All {
        return true;
    }
    let Some(at) = record.datetime(&now.timezone()) else {
        // out-of-range timestamp: never visible in a bounded window
        return false;
    };
    match window {
        Window::Day => same_day(&at, now),
        Window::Week => at.naive_local() >= week_start(now),
        Window::Month => same_month(&at, now),
        Window::All => true,
    }
}

/// Apply window and class selectors. The class match is exact and
/// case-sensitive.
pub fn select_visible<'a, Tz: TimeZone>(
    records: &'a [TardyRecord],
    window: Window,
    class_filter: Option<&str>,
    now: &DateTime<Tz>,
) -> Vec<&'a TardyRecord> {
    records
        .iter()
        .filter(|r| match class_filter {
            Some(class) if !class.is_empty() => r.class_name == class,
            _ => true,
        })
        .filter(|r| in_window(r, window, now))
        .collect()
}
