//! Backup and restore of the two state entities as a single JSON snapshot,
//! with optional zip compression.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::errors::{AppError, AppResult};
use crate::models::{Student, TardyRecord};

pub const BACKUP_VERSION: &str = "1.0";

/// Snapshot of the two local-storage entities plus metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupBlob {
    #[serde(rename = "masterStudentList")]
    pub roster: Vec<Student>,
    #[serde(rename = "tardyRecords")]
    pub records: Vec<TardyRecord>,
    pub version: String,
    #[serde(rename = "exportDate")]
    pub export_date: i64,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Write a backup snapshot to `dest_file`. With `compress` the JSON is
    /// wrapped in a .zip and the plain copy removed.
    pub fn backup(
        records: &[TardyRecord],
        roster: &[Student],
        dest_file: &str,
        compress: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let blob = BackupBlob {
            roster: roster.to_vec(),
            records: records.to_vec(),
            version: BACKUP_VERSION.to_string(),
            export_date: Utc::now().timestamp_millis(),
        };

        fs::write(dest, serde_json::to_string_pretty(&blob)?)?;

        if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest.to_path_buf() {
                fs::remove_file(dest)?;
            }
            Ok(compressed)
        } else {
            Ok(dest.to_path_buf())
        }
    }

    /// Read a backup snapshot back. Only basic shape is validated; unknown
    /// version strings are accepted.
    pub fn read(src_file: &str) -> AppResult<BackupBlob> {
        let src = Path::new(src_file);
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "backup file not found: {}",
                src.display()
            )));
        }

        let raw = if src.extension().is_some_and(|e| e == "zip") {
            read_zipped(src)?
        } else {
            fs::read_to_string(src)?
        };

        serde_json::from_str(&raw)
            .map_err(|e| AppError::Backup(format!("not a valid backup file: {e}")))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .ok_or_else(|| AppError::Backup("invalid backup path".to_string()))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name.to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

/// Pull the first entry of a zipped backup back out as a string.
fn read_zipped(path: &Path) -> AppResult<String> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(std::io::Error::other)?;
    if archive.is_empty() {
        return Err(AppError::Backup("backup archive is empty".to_string()));
    }
    let mut entry = archive.by_index(0).map_err(std::io::Error::other)?;
    let mut raw = String::new();
    entry.read_to_string(&mut raw)?;
    Ok(raw)
}
