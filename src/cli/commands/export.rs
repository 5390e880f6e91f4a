use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, log_op};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        format,
        file,
        force,
    } = cmd
    {
        let summary = EditLogic::view(cfg, *id, |rec| rec.summary())?;
        let path = ExportLogic::export(&summary, *format, file.as_deref(), *force)?;

        log_op(
            cfg,
            "export",
            *id,
            &format!("Exported {} to {}", format.as_str(), path.display()),
        );
    }
    Ok(())
}
