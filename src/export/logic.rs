// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportSummary;
use crate::utils::path::sanitize_file_stem;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `summary` to `file`, or to the default name in the current
    /// directory when no file is given.
    pub fn export(
        summary: &ExportSummary,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(summary, format)),
        };

        Self::write(summary, format, &path, force)?;
        Ok(path)
    }

    pub fn write(
        summary: &ExportSummary,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(summary, path),
            ExportFormat::Json => export_json(summary, path),
        }
    }
}

/// `timesheet-<employee>-<weekEnding>.<ext>`
pub fn default_file_name(summary: &ExportSummary, format: ExportFormat) -> String {
    format!(
        "timesheet-{}-{}.{}",
        sanitize_file_stem(&summary.employee_name),
        summary.week_ending_iso,
        format.as_str()
    )
}
