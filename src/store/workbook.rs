//! The workbook: every timesheet, kept in one JSON document.

use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Timesheet>,
}

impl Workbook {
    /// Load the workbook; a missing file is an empty workbook.
    pub fn open(path: &Path) -> AppResult<Self> {
        let sheets = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Write through a temporary file so a failed write never truncates the workbook.
    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&self.sheets)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn next_id(&self) -> u32 {
        self.sheets.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Newest first.
    pub fn insert(&mut self, sheet: Timesheet) {
        self.sheets.insert(0, sheet);
    }

    pub fn get(&self, id: u32) -> AppResult<&Timesheet> {
        self.sheets
            .iter()
            .find(|s| s.id == id)
            .ok_or(AppError::TimesheetNotFound(id))
    }

    /// Take a timesheet out for editing; hand it back with [`Workbook::put`].
    pub fn take(&mut self, id: u32) -> AppResult<(usize, Timesheet)> {
        let pos = self.position(id)?;
        Ok((pos, self.sheets.remove(pos)))
    }

    pub fn put(&mut self, pos: usize, sheet: Timesheet) {
        let pos = pos.min(self.sheets.len());
        self.sheets.insert(pos, sheet);
    }

    pub fn remove(&mut self, id: u32) -> AppResult<Timesheet> {
        let pos = self.position(id)?;
        Ok(self.sheets.remove(pos))
    }

    fn position(&self, id: u32) -> AppResult<usize> {
        self.sheets
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::TimesheetNotFound(id))
    }
}
