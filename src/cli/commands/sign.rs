use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use base64::prelude::*;
use std::fs;
use std::path::Path;

/// Attach a signature image, stored as an opaque data URL.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sign {
        id,
        role,
        file,
        date: signed_on,
    } = cmd
    {
        let signed_on = match signed_on {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let path = Path::new(file);
        let bytes = fs::read(path)?;
        let data_url = format!(
            "data:{};base64,{}",
            mime_for(path),
            BASE64_STANDARD.encode(bytes)
        );

        EditLogic::apply(cfg, *id, "sign", |rec| {
            rec.sign(*role, data_url, signed_on);
            Ok(((), format!("{} signature attached", role.as_str())))
        })?;

        success(format!(
            "✍️ {} signature attached to timesheet #{}.",
            role.as_str(),
            id
        ));
    }

    Ok(())
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
