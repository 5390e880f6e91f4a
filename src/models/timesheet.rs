use super::line_item::LineItem;
use super::weekly_grid::{DEFAULT_RATE, Week, WeeklyGrid};
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lifecycle of a timesheet. Only `Draft → Submitted` exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Draft,
    Submitted,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Submitted => "Submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: u32,
    pub employee_name: String,
    pub employee_id: String,
    pub foreman_name: String,
    pub week_ending: NaiveDate,
    #[serde(default)]
    pub week: Week,
    pub line_items: Vec<LineItem>,
    /// Unset until the first grid cell or rate is touched.
    pub daily_time_grid: Option<WeeklyGrid>,
    /// Rate used when the grid gets created. Afterwards it mirrors
    /// `daily_time_grid.rate`, which is the one used for the amount.
    #[serde(default = "default_rate")]
    pub rate_per_hour: f64,
    pub status: Status,
    pub last_edited: NaiveDateTime,
    #[serde(default)]
    pub notes: String,
    /// Opaque image data (data URL), passed through to export untouched.
    pub foreman_signature: Option<String>,
    pub signature_date: Option<NaiveDate>,
    pub employee_signature: Option<String>,
    pub employee_signature_date: Option<NaiveDate>,
}

fn default_rate() -> f64 {
    DEFAULT_RATE
}

/// Header fields that can be edited as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderField {
    EmployeeName,
    EmployeeId,
    ForemanName,
    WeekEnding,
    Notes,
    SignatureDate,
    EmployeeSignatureDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignatureRole {
    Foreman,
    Employee,
}

impl SignatureRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureRole::Foreman => "foreman",
            SignatureRole::Employee => "employee",
        }
    }
}
