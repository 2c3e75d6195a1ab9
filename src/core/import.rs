//! Roster import: maps heterogeneous spreadsheet rows into validated roster
//! entries.
//!
//! The normalizer only sees a 2-D grid of cells (row 0 = headers); how the
//! grid was parsed is the caller's concern. The shipped reader handles CSV.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::Student;

/// Outcome of a normalization run. Partial success is allowed: accepted rows
/// are imported even when some rows were rejected.
#[derive(Debug)]
pub struct ImportReport {
    pub students: Vec<Student>,
    pub rejected: usize,
}

/// Locate the three required columns by fuzzy header match: the lowercased
/// header text must contain "nama" (name), "nis" (student number) or "kelas"
/// (class). First match wins per field.
fn locate_columns(headers: &[String]) -> AppResult<(usize, usize, usize)> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let find = |needle: &str| lowered.iter().position(|h| h.contains(needle));

    let name = find("nama");
    let nis = find("nis");
    let class = find("kelas");

    match (name, nis, class) {
        (Some(n), Some(i), Some(c)) => Ok((n, i, c)),
        _ => Err(AppError::Import(
            "the file must have columns for 'Nama', 'NIS' and 'Kelas'".to_string(),
        )),
    }
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Normalize a grid into roster entries. Fails the whole import when a
/// required column is missing or the grid has fewer than two rows; otherwise
/// rejects (and counts) rows with any empty field after trimming.
pub fn normalize_grid(grid: &[Vec<String>]) -> AppResult<ImportReport> {
    if grid.len() < 2 {
        return Err(AppError::Import(
            "the file has no data rows, or only a header".to_string(),
        ));
    }

    let (name_idx, nis_idx, class_idx) = locate_columns(&grid[0])?;

    let mut students = Vec::new();
    let mut rejected = 0;

    for row in &grid[1..] {
        let name = cell(row, name_idx);
        let nis = cell(row, nis_idx);
        let class_name = cell(row, class_idx);

        if !name.is_empty() && !nis.is_empty() && !class_name.is_empty() {
            students.push(Student {
                name,
                nis,
                class_name,
            });
        } else {
            rejected += 1;
        }
    }

    Ok(ImportReport { students, rejected })
}

/// Read a CSV file into the grid shape the normalizer expects. Rows may have
/// ragged lengths; missing cells read as empty.
pub fn read_csv_grid(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("cannot read {}: {}", path.display(), e)))?;

    let mut grid = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| AppError::Import(format!("malformed CSV: {e}")))?;
        grid.push(row.iter().map(|c| c.to_string()).collect());
    }
    Ok(grid)
}
