use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// `save` and `submit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Save { id } => {
            EditLogic::apply(cfg, *id, "save", |rec| {
                rec.mark_saved();
                Ok(((), "Draft saved".to_string()))
            })?;
            success(format!("💾 Timesheet #{} saved.", id));
        }
        Commands::Submit { id } => {
            EditLogic::apply(cfg, *id, "submit", |rec| {
                rec.submit()?;
                Ok(((), "Submitted".to_string()))
            })?;
            success(format!("📨 Timesheet #{} submitted.", id));
        }
        _ => {}
    }

    Ok(())
}
