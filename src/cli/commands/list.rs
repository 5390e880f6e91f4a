use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Workbook;
use crate::ui::messages::info;
use crate::ui::render::render_list;
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let book = Workbook::open(&cfg.workbook_path())?;

    if book.sheets.is_empty() {
        info("No timesheets yet. Create one with `rtimesheet new`.");
        return Ok(());
    }

    print!("{}", render_list(&book.sheets, today()));
    Ok(())
}
