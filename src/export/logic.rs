// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::models::TardyRecord;
use std::path::Path;

/// High-level export entry point. The caller hands over the already-filtered
/// visible record set; no further selection happens here.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        records: &[&TardyRecord],
        format: ExportFormat,
        file: &str,
        title: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = records
            .iter()
            .map(|r| RecordExport::from_record(r))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Xlsx => export_xlsx(&rows, path),
            ExportFormat::Pdf => export_pdf(&rows, path, title),
        }
    }
}
