//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! The time accounting engine itself never fails on bad input: unparseable
//! times and numbers degrade to zero contributions. Only the edges (CLI,
//! workbook file, export) produce errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Workbook format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Week ending {date} is not a {expected}")]
    InvalidWeekEnding { date: String, expected: String },

    #[error("Invalid job code: {0}")]
    InvalidJobCode(String),

    #[error("Invalid weekday: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No timesheet with id {0}")]
    TimesheetNotFound(u32),

    #[error("No line item with id {0}")]
    LineItemNotFound(u64),

    #[error("Timesheet {0} has already been submitted")]
    AlreadySubmitted(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
