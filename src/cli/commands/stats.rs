use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::stats::{
    count_by_window, histogram_by_class, histogram_by_month, top_offenders, MONTH_LABELS,
};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { limit } = cmd {
        let session = Session::open(cfg);
        let records = session.store().records();

        if records.is_empty() {
            info("No records yet.");
            return Ok(());
        }

        let now = Local::now();
        let counts = count_by_window(records, &now);

        header("Overview");
        println!("  Today:      {}", counts.today);
        println!("  This week:  {}", counts.this_week);
        println!("  This month: {}", counts.this_month);
        println!("  Total:      {}", counts.total);
        println!();

        header("By class");
        let mut class_table = Table::new(vec![Column::new("CLASS", 12), Column::new("COUNT", 6)]);
        for (class, count) in histogram_by_class(records) {
            class_table.add_row(vec![class, count.to_string()]);
        }
        println!("{}", class_table.render());

        header("By month");
        let slots = histogram_by_month(records, &Local);
        for (label, count) in MONTH_LABELS.iter().zip(slots.iter()) {
            println!("  {:<4}{}", label, count);
        }
        println!();

        let limit = limit.unwrap_or(cfg.top_limit);
        header(format!("Top {} offenders", limit));
        let mut top_table = Table::new(vec![
            Column::new("#", 3),
            Column::new("NAME", 24),
            Column::new("CLASS", 8),
            Column::new("COUNT", 6),
        ]);
        for (i, offender) in top_offenders(records, limit).iter().enumerate() {
            top_table.add_row(vec![
                (i + 1).to_string(),
                offender.name.clone(),
                offender.class_name.clone(),
                offender.count.to_string(),
            ]);
        }
        println!("{}", top_table.render());
    }

    Ok(())
}
