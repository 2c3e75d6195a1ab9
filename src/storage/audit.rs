//! Append-only operation log kept next to the state blobs.
//!
//! Captures mutations and best-effort cloud failures that are deliberately
//! not surfaced to the user. Printable with `tardylog log --print`.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

const LOG_FILE: &str = "tardylog.log";

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(LOG_FILE),
        }
    }

    /// Write one log line. Best-effort: a failing log write must never take
    /// down the operation it describes.
    pub fn append(&self, operation: &str, target: &str, message: &str) {
        let now = Local::now().to_rfc3339();
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{} | {} | {} | {}", now, operation, target, message);
        }
    }

    /// All log lines, oldest first. Missing file → empty.
    pub fn read_all(&self) -> AppResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(|l| l.to_string()).collect())
    }
}
