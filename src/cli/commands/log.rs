use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::audit::AuditLog;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let audit = AuditLog::new(Path::new(&cfg.storage_dir));
            let lines = audit.read_all()?;
            if lines.is_empty() {
                info("The operation log is empty.");
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
        } else {
            info("Use --print to show the operation log.");
        }
    }

    Ok(())
}
