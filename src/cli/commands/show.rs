use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::render::render_detail;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let summary = EditLogic::view(cfg, *id, |rec| rec.summary())?;
        print!("{}", render_detail(&summary, &cfg.separator_char));
    }

    Ok(())
}
