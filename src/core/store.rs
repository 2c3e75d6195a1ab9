//! In-memory authoritative state: the tardy-record list and the roster.
//!
//! The store is the only component that mutates state. The record list is
//! kept newest-first; filters and exports never re-sort it.

use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::{Student, TardyRecord};

#[derive(Default)]
pub struct RecordStore {
    records: Vec<TardyRecord>,
    roster: Vec<Student>,
    /// Latched once the first durable load has completed. Saves are
    /// suppressed before that point so an empty initial state can never
    /// overwrite prior durable state.
    loaded: bool,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TardyRecord] {
        &self.records
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Construct a new record for `student` with a fresh id and the current
    /// timestamp, and prepend it (newest-first invariant).
    pub fn add_record(&mut self, student: &Student) -> AppResult<TardyRecord> {
        if student.nis.trim().is_empty() {
            return Err(AppError::Other(
                "student identifier (nis) must not be empty".to_string(),
            ));
        }
        let record = TardyRecord::create(student, Utc::now().timestamp_millis());
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Remove the first record whose real id or fallback id equals `id`.
    /// Returns whether anything was removed; a miss is an idempotent no-op,
    /// not an error.
    pub fn delete_record(&mut self, id: &str) -> bool {
        if let Some(pos) = self.records.iter().position(|r| r.matches_id(id)) {
            self.records.remove(pos);
            true
        } else {
            false
        }
    }

    /// Wholesale replacement, used when loading from the cloud or a backup.
    /// No merge.
    pub fn replace_all(&mut self, records: Vec<TardyRecord>, roster: Vec<Student>) {
        self.records = records;
        self.roster = roster;
    }

    pub fn replace_records(&mut self, records: Vec<TardyRecord>) {
        self.records = records;
    }

    pub fn replace_roster(&mut self, roster: Vec<Student>) {
        self.roster = roster;
    }

    /// Merge `incoming` into the roster keyed by nis. Incoming entries win on
    /// collision; every student keeps the position of their first occurrence
    /// across the two lists.
    pub fn upsert_roster(&mut self, incoming: Vec<Student>) {
        let mut merged: Vec<Student> = Vec::with_capacity(self.roster.len() + incoming.len());
        let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

        for student in self.roster.drain(..).chain(incoming) {
            match index.get(&student.nis) {
                Some(&i) => merged[i] = student,
                None => {
                    index.insert(student.nis.clone(), merged.len());
                    merged.push(student);
                }
            }
        }

        self.roster = merged;
    }

    /// Roster lookup by nis.
    pub fn find_student(&self, nis: &str) -> Option<&Student> {
        self.roster.iter().find(|s| s.nis == nis)
    }

    /// Distinct class names in the roster, sorted.
    pub fn class_names(&self) -> Vec<String> {
        self.roster
            .iter()
            .map(|s| s.class_name.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
