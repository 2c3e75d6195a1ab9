use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{normalize_grid, read_csv_grid};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Import roster entries from a CSV file. Rows with incomplete data are
/// skipped and counted; the valid rows are merged into the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let grid = read_csv_grid(Path::new(file))?;
        let report = normalize_grid(&grid)?;

        if !report.students.is_empty() {
            let mut session = Session::open(cfg);
            session.import_roster(report.students.clone())?;
        }

        success(format!(
            "Processed {} students. The roster has been updated.",
            report.students.len()
        ));
        if report.rejected > 0 {
            warning(format!(
                "Skipped {} rows with incomplete data.",
                report.rejected
            ));
        }
    }

    Ok(())
}
