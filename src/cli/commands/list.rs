use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_visible;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::RecordExport;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { window, class_name } = cmd {
        let session = Session::open(cfg);
        let records = session.store().records();

        let now = Local::now();
        let visible = select_visible(records, *window, class_name.as_deref(), &now);

        if visible.is_empty() {
            info(format!(
                "No records in window '{}'{}.",
                window.as_str(),
                class_name
                    .as_deref()
                    .map(|c| format!(" for class {c}"))
                    .unwrap_or_default()
            ));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 24),
            Column::new("NAME", 24),
            Column::new("NIS", 12),
            Column::new("CLASS", 8),
            Column::new("DATE", 10),
            Column::new("TIME", 5),
        ]);

        for record in &visible {
            let row = RecordExport::from_record(record);
            table.add_row(vec![
                row.id, row.name, row.nis, row.class, row.date, row.time,
            ]);
        }

        println!("{}", table.render());
        info(format!(
            "{} of {} records shown (window: {}).",
            visible.len(),
            records.len(),
            window.as_str()
        ));
    }

    Ok(())
}
