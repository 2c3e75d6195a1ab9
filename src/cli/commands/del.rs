use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !yes && !ask_confirmation(&format!("Delete record {id} permanently?")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut session = Session::open(cfg);

        // A miss is an idempotent no-op, not an error
        if session.delete_record(id)? {
            success(format!("Record {id} has been deleted."));
        } else {
            info(format!("No record matched {id}; nothing to do."));
        }
    }

    Ok(())
}
