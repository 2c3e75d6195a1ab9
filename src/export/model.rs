// src/export/model.rs

use chrono::Local;
use serde::Serialize;

use crate::models::TardyRecord;

/// Flat row shape shared by all export formats.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub name: String,
    pub nis: String,
    pub class: String,
    pub date: String, // YYYY-MM-DD, local calendar
    pub time: String, // HH:MM
    pub timestamp: i64,
}

impl RecordExport {
    pub fn from_record(record: &TardyRecord) -> Self {
        let (date, time) = match record.datetime(&Local) {
            Some(at) => (
                at.format("%Y-%m-%d").to_string(),
                at.format("%H:%M").to_string(),
            ),
            None => (String::new(), String::new()),
        };
        Self {
            id: record.effective_id(),
            name: record.name.clone(),
            nis: record.nis.clone(),
            class: record.class_name.clone(),
            date,
            time,
            timestamp: record.timestamp,
        }
    }
}

/// Headers for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "name", "nis", "class", "date", "time", "timestamp"]
}

/// Convert a record into a row of display strings (for PDF).
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.name.clone(),
        r.nis.clone(),
        r.class.clone(),
        r.date.clone(),
        r.time.clone(),
        r.timestamp.to_string(),
    ]
}

pub(crate) fn records_to_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
