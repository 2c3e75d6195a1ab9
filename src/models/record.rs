use chrono::{DateTime, TimeZone};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::student::Student;

/// Separator used for the fallback identity of records that arrive from the
/// cloud without an `id` column. Real ids use `-`, so the two forms can never
/// be confused.
pub const FALLBACK_SEP: char = ':';

/// One tardiness event. Created once, never mutated, deleted explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TardyRecord {
    #[serde(default)]
    pub id: String, // may be empty for rows fetched from the cloud
    pub name: String,
    pub nis: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub timestamp: i64, // epoch milliseconds
}

impl TardyRecord {
    /// Build a fresh record for `student` stamped at `timestamp_ms`.
    pub fn create(student: &Student, timestamp_ms: i64) -> Self {
        Self {
            id: generate_id(timestamp_ms),
            name: student.name.clone(),
            nis: student.nis.clone(),
            class_name: student.class_name.clone(),
            timestamp: timestamp_ms,
        }
    }

    /// Derived identity for records without a real id: `nis:timestamp`.
    pub fn fallback_id(&self) -> String {
        format!("{}{}{}", self.nis, FALLBACK_SEP, self.timestamp)
    }

    /// The id shown to the user and accepted by `del`: the real id when
    /// present, the fallback form otherwise.
    pub fn effective_id(&self) -> String {
        if self.id.is_empty() {
            self.fallback_id()
        } else {
            self.id.clone()
        }
    }

    /// True when `id` names this record, either by real id or fallback id.
    pub fn matches_id(&self, id: &str) -> bool {
        (!self.id.is_empty() && self.id == id) || self.fallback_id() == id
    }

    /// The event instant in the given timezone.
    pub fn datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Fresh record id: epoch millis plus a random base36 suffix.
pub fn generate_id(timestamp_ms: i64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", timestamp_ms, suffix)
}

/// Try to read `id` as a fallback identity. Returns (nis, timestamp) when the
/// string splits on the separator with a numeric timestamp on the right.
pub fn decompose_fallback_id(id: &str) -> Option<(&str, i64)> {
    let (nis, ts) = id.rsplit_once(FALLBACK_SEP)?;
    let ts = ts.parse::<i64>().ok()?;
    if nis.is_empty() {
        return None;
    }
    Some((nis, ts))
}
