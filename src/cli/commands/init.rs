use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::ttlog;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty workbook, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimesheet…");

    let cfg = Config::init_all(cli.workbook.clone(), cli.test)?;

    // log interno (non bloccante)
    if let Err(e) = ttlog(
        &cfg.log_path(),
        "init",
        "",
        &format!("Workbook initialized at {}", cfg.workbook),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rTimesheet initialization completed!");
    Ok(())
}
