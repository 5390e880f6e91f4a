use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::reconciler::NewTimesheet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Create a new draft timesheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        employee,
        employee_id,
        foreman,
        week_ending,
    } = cmd
    {
        let week_ending = match week_ending {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let id = EditLogic::create(
            cfg,
            NewTimesheet {
                employee_name: employee.clone(),
                employee_id: employee_id.clone(),
                foreman_name: foreman.clone(),
                week_ending,
            },
        )?;

        success(format!("Timesheet #{} created (Draft).", id));
    }

    Ok(())
}
