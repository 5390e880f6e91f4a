use crate::config::Config;
use crate::core::edit::log_op;
use crate::errors::AppResult;
use crate::models::timesheet::Timesheet;
use crate::store::Workbook;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a timesheet from the workbook. Nothing else references it.
    pub fn apply(cfg: &Config, id: u32) -> AppResult<Timesheet> {
        let mut book = Workbook::open(&cfg.workbook_path())?;
        let removed = book.remove(id)?;
        book.save()?;

        log_op(
            cfg,
            "del",
            id,
            &format!(
                "Deleted timesheet for '{}', week ending {}",
                removed.employee_name, removed.week_ending
            ),
        );

        Ok(removed)
    }
}
