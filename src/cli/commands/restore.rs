use std::io::{self, Write};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let blob = BackupLogic::read(file)?;

        if !yes {
            warning(format!(
                "Replace ALL local data with the backup from {} ({} students, {} records)?",
                file,
                blob.roster.len(),
                blob.records.len()
            ));
            print!("Confirm [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                info("Restore cancelled.");
                return Ok(());
            }
        }

        let mut session = Session::open(cfg);
        let (students, records) = (blob.roster.len(), blob.records.len());
        session.restore(blob.records, blob.roster)?;

        success(format!(
            "Restored {} students and {} records from {}.",
            students, records, file
        ));
    }

    Ok(())
}
