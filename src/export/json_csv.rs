use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{notify_export_success, RecordExport};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row included.
pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot open {}: {}", path.display(), e)))?;

    if records.is_empty() {
        // serde only emits the header with the first row; keep it for empty sets
        wtr.write_record(get_headers())
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
