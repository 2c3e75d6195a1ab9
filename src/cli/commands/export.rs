use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_visible;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export the currently visible record set (window + class filter applied).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        window,
        class_name,
        force,
    } = cmd
    {
        let session = Session::open(cfg);
        let now = Local::now();
        let visible = select_visible(
            session.store().records(),
            *window,
            class_name.as_deref(),
            &now,
        );

        let title = match class_name {
            Some(class) => format!("Tardiness Report - {} ({})", class, window.as_str()),
            None => format!("Tardiness Report ({})", window.as_str()),
        };

        ExportLogic::export(&visible, *format, file, &title, *force)?;
    }

    Ok(())
}
