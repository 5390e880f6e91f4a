use crate::config::Config;
use crate::core::reconciler::{NewTimesheet, Reconciler};
use crate::errors::AppResult;
use crate::store::Workbook;
use crate::store::log::ttlog;
use crate::ui::messages::warning;
use crate::utils::date::today;

/// High-level business logic: one workbook round-trip per user action.
pub struct EditLogic;

impl EditLogic {
    /// Create a draft timesheet and return its id.
    pub fn create(cfg: &Config, fields: NewTimesheet) -> AppResult<u32> {
        let mut book = Workbook::open(&cfg.workbook_path())?;
        let id = book.next_id();

        let rec = Reconciler::create(id, fields, cfg.week()?, cfg.default_rate, today())?;
        let sheet = rec.into_timesheet();
        let msg = format!(
            "Timesheet created for '{}', week ending {}",
            sheet.employee_name, sheet.week_ending
        );

        book.insert(sheet);
        book.save()?;
        log_op(cfg, "new", id, &msg);

        Ok(id)
    }

    /// Load timesheet `id`, run `action` on it, write the workbook back.
    ///
    /// Nothing is written when `action` fails. The returned message is logged
    /// under `operation`.
    pub fn apply<T, F>(cfg: &Config, id: u32, operation: &str, action: F) -> AppResult<T>
    where
        F: FnOnce(&mut Reconciler) -> AppResult<(T, String)>,
    {
        let mut book = Workbook::open(&cfg.workbook_path())?;
        let (pos, sheet) = book.take(id)?;

        let mut rec = Reconciler::open(sheet);
        let (out, msg) = action(&mut rec)?;

        book.put(pos, rec.into_timesheet());
        book.save()?;
        log_op(cfg, operation, id, &msg);

        Ok(out)
    }

    /// Read-only access to timesheet `id`.
    pub fn view<T, F>(cfg: &Config, id: u32, read: F) -> AppResult<T>
    where
        F: FnOnce(&Reconciler) -> T,
    {
        let book = Workbook::open(&cfg.workbook_path())?;
        let rec = Reconciler::open(book.get(id)?.clone());
        Ok(read(&rec))
    }
}

/// Log interno, non bloccante.
pub(crate) fn log_op(cfg: &Config, operation: &str, id: u32, message: &str) {
    let target = format!("timesheet #{id}");
    if let Err(e) = ttlog(&cfg.log_path(), operation, &target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
