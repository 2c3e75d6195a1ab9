// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table};
use crate::export::pdf::ReportPdf;
use crate::export::{notify_export_success, RecordExport};
use crate::ui::messages::info;
use std::path::Path;

/// Printable paginated report of the given record set.
pub(crate) fn export_pdf(records: &[RecordExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = records_to_table(records);

    let mut pdf = ReportPdf::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF write failed: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
