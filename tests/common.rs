#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tardylog::models::{Student, TardyRecord};
use tardylog::storage::local::LocalStore;

pub fn tdl() -> Command {
    cargo_bin_cmd!("tardylog")
}

/// Create a unique, empty storage directory inside the system temp dir.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tardylog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn student(name: &str, nis: &str, class_name: &str) -> Student {
    Student::new(name, nis, class_name)
}

pub fn record(id: &str, name: &str, nis: &str, class_name: &str, timestamp: i64) -> TardyRecord {
    TardyRecord {
        id: id.to_string(),
        name: name.to_string(),
        nis: nis.to_string(),
        class_name: class_name.to_string(),
        timestamp,
    }
}

/// Seed the storage directory with state blobs directly via the library API.
pub fn seed_state(dir: &str, records: &[TardyRecord], roster: &[Student]) {
    LocalStore::new(Path::new(dir))
        .save_state(records, roster)
        .expect("seed state");
}

/// Read the persisted record blob back, for asserting on durable state.
pub fn read_records(dir: &str) -> Vec<TardyRecord> {
    let raw = fs::read_to_string(Path::new(dir).join("tardyRecords.json")).expect("records blob");
    serde_json::from_str(&raw).expect("parse records blob")
}

/// Read the persisted roster blob back.
pub fn read_roster(dir: &str) -> Vec<Student> {
    let raw =
        fs::read_to_string(Path::new(dir).join("masterStudentList.json")).expect("roster blob");
    serde_json::from_str(&raw).expect("parse roster blob")
}

/// Write a small CSV roster file and return its path.
pub fn write_csv(name: &str, content: &str) -> String {
    let p = temp_out(name, "csv");
    fs::write(&p, content).expect("write csv");
    p
}
