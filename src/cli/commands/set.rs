use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Edit one header field.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, field, value } = cmd {
        EditLogic::apply(cfg, *id, "edit", |rec| {
            rec.set_field(*field, value)?;
            Ok(((), format!("{:?} set to '{}'", field, value)))
        })?;

        success(format!("Timesheet #{} updated.", id));
    }

    Ok(())
}
