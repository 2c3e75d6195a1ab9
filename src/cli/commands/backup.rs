use std::io::{self, Write};
use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        // Destination exists → ask confirmation
        if Path::new(file).exists() {
            warning(format!("The file '{file}' already exists."));
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                info("Backup cancelled.");
                return Ok(());
            }
        }

        let session = Session::open(cfg);
        let written = BackupLogic::backup(
            session.store().records(),
            session.store().roster(),
            file,
            *compress,
        )?;
        session.audit().append("backup", &written.to_string_lossy(), "backup created");

        success(format!("Backup created: {}", written.display()));
    }

    Ok(())
}
