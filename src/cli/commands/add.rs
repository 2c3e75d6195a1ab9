use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use crate::ui::messages::success;

/// Record a tardy event. The student is looked up in the roster by nis;
/// students not in the roster can be recorded by passing --name and --class
/// explicitly (this does not add them to the roster).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        nis,
        name,
        class_name,
    } = cmd
    {
        let mut session = Session::open(cfg);

        let student = match session.store().find_student(nis) {
            Some(s) => s.clone(),
            None => match (name, class_name) {
                (Some(n), Some(c)) => Student::new(n, nis, c),
                _ => {
                    return Err(AppError::UnknownStudent(format!(
                        "{nis} is not in the roster; pass --name and --class to record anyway"
                    )))
                }
            },
        };

        let record = session.add_record(&student)?;

        let when = record
            .datetime(&Local)
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        success(format!(
            "Recorded tardy event for {} ({}) at {} [id {}]",
            record.name, record.nis, when, record.id
        ));
    }

    Ok(())
}
