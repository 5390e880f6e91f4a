//! The single mutable aggregate: one timesheet under edit.
//!
//! Every mutating call is applied completely and stamps `last_edited`.
//! Line-item hours and grid hours are kept as two independent totals; nothing
//! here tries to make them agree.

use crate::core::calculator::grid::{GridTotals, aggregate};
use crate::core::ledger::{Ledger, LedgerTotals, totals};
use crate::core::summary::build_summary;
use crate::errors::{AppError, AppResult};
use crate::export::model::ExportSummary;
use crate::models::day_record::GridCell;
use crate::models::line_item::LineField;
use crate::models::time_of_day::TimeEntry;
use crate::models::timesheet::{HeaderField, SignatureRole, Status, Timesheet};
use crate::models::weekly_grid::{Week, WeeklyGrid};
use crate::utils::date::{self, next_week_ending, parse_date, weekday_name};
use crate::utils::time::parse_decimal;
use chrono::{Datelike, NaiveDate, Weekday};

/// Identity fields collected when a timesheet is created.
#[derive(Debug, Clone, Default)]
pub struct NewTimesheet {
    pub employee_name: String,
    pub employee_id: String,
    pub foreman_name: String,
    /// Defaults to the next week-ending day (today included).
    pub week_ending: Option<NaiveDate>,
}

pub struct Reconciler {
    sheet: Timesheet,
}

impl Reconciler {
    /// Create a fresh draft: no line items, no grid.
    pub fn create(
        id: u32,
        fields: NewTimesheet,
        week: Week,
        rate: f64,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let week_ending = match fields.week_ending {
            Some(d) => {
                check_week_ending(d, week.ending)?;
                d
            }
            None => next_week_ending(today, week.ending),
        };

        let sheet = Timesheet {
            id,
            employee_name: fields.employee_name,
            employee_id: fields.employee_id,
            foreman_name: fields.foreman_name,
            week_ending,
            week,
            line_items: Vec::new(),
            daily_time_grid: None,
            rate_per_hour: rate,
            status: Status::Draft,
            last_edited: date::now(),
            notes: String::new(),
            foreman_signature: None,
            signature_date: Some(today),
            employee_signature: None,
            employee_signature_date: Some(today),
        };

        Ok(Self { sheet })
    }

    /// Wrap a stored timesheet. Once a grid exists its rate is authoritative,
    /// so a header rate that drifted in the file is realigned to it.
    pub fn open(mut sheet: Timesheet) -> Self {
        if let Some(grid) = &sheet.daily_time_grid {
            sheet.rate_per_hour = grid.rate;
        }
        Self { sheet }
    }

    pub fn timesheet(&self) -> &Timesheet {
        &self.sheet
    }

    pub fn into_timesheet(self) -> Timesheet {
        self.sheet
    }

    fn touch(&mut self) {
        self.sheet.last_edited = date::now();
    }

    // ---------------------------
    // Header
    // ---------------------------

    pub fn set_field(&mut self, field: HeaderField, value: &str) -> AppResult<()> {
        match field {
            HeaderField::EmployeeName => self.sheet.employee_name = value.to_string(),
            HeaderField::EmployeeId => self.sheet.employee_id = value.to_string(),
            HeaderField::ForemanName => self.sheet.foreman_name = value.to_string(),
            HeaderField::Notes => self.sheet.notes = value.to_string(),
            HeaderField::WeekEnding => {
                let d = parse_date(value).ok_or_else(|| AppError::InvalidDate(value.into()))?;
                check_week_ending(d, self.sheet.week.ending)?;
                self.sheet.week_ending = d;
            }
            HeaderField::SignatureDate => self.sheet.signature_date = optional_date(value)?,
            HeaderField::EmployeeSignatureDate => {
                self.sheet.employee_signature_date = optional_date(value)?
            }
        }

        self.touch();
        Ok(())
    }

    pub fn sign(&mut self, role: SignatureRole, image_data: String, signed_on: NaiveDate) {
        match role {
            SignatureRole::Foreman => {
                self.sheet.foreman_signature = Some(image_data);
                self.sheet.signature_date = Some(signed_on);
            }
            SignatureRole::Employee => {
                self.sheet.employee_signature = Some(image_data);
                self.sheet.employee_signature_date = Some(signed_on);
            }
        }
        self.touch();
    }

    // ---------------------------
    // Line items
    // ---------------------------

    pub fn add_line_item(&mut self) -> u64 {
        let id = Ledger::new(&mut self.sheet.line_items).append();
        self.touch();
        id
    }

    pub fn remove_line_item(&mut self, id: u64) -> AppResult<()> {
        Ledger::new(&mut self.sheet.line_items).remove(id)?;
        self.touch();
        Ok(())
    }

    pub fn update_line_item(&mut self, id: u64, field: LineField, value: &str) -> AppResult<()> {
        Ledger::new(&mut self.sheet.line_items).update(id, field, value)?;
        self.touch();
        Ok(())
    }

    // ---------------------------
    // Daily grid
    // ---------------------------

    fn grid_mut(&mut self) -> &mut WeeklyGrid {
        let week = self.sheet.week;
        let rate = self.sheet.rate_per_hour;
        self.sheet
            .daily_time_grid
            .get_or_insert_with(|| WeeklyGrid::new(week, rate))
    }

    pub fn set_grid_cell(&mut self, day: Weekday, cell: GridCell, value: &str) {
        *self.grid_mut().day_mut(day).cell_mut(cell) = TimeEntry::new(value);
        self.touch();
    }

    /// Blank one cell; the grid keeps all seven days.
    pub fn clear_grid_cell(&mut self, day: Weekday, cell: GridCell) {
        *self.grid_mut().day_mut(day).cell_mut(cell) = TimeEntry::empty();
        self.touch();
    }

    /// Hourly rate as typed; unparseable input counts as 0.
    pub fn set_rate(&mut self, value: &str) {
        let rate = parse_decimal(value);
        self.sheet.rate_per_hour = rate;
        self.grid_mut().rate = rate;
        self.touch();
    }

    // ---------------------------
    // Lifecycle
    // ---------------------------

    pub fn mark_saved(&mut self) {
        self.touch();
    }

    pub fn submit(&mut self) -> AppResult<()> {
        if self.sheet.status == Status::Submitted {
            return Err(AppError::AlreadySubmitted(self.sheet.id));
        }
        self.sheet.status = Status::Submitted;
        self.touch();
        Ok(())
    }

    // ---------------------------
    // Derived values
    // ---------------------------

    pub fn line_totals(&self) -> LedgerTotals {
        totals(&self.sheet.line_items)
    }

    pub fn grid_totals(&self) -> Option<GridTotals> {
        self.sheet.daily_time_grid.as_ref().map(aggregate)
    }

    pub fn summary(&self) -> ExportSummary {
        build_summary(&self.sheet)
    }
}

fn check_week_ending(d: NaiveDate, ending: Weekday) -> AppResult<()> {
    if d.weekday() != ending {
        return Err(AppError::InvalidWeekEnding {
            date: date::format_iso(d),
            expected: weekday_name(ending).to_string(),
        });
    }
    Ok(())
}

fn optional_date(value: &str) -> AppResult<Option<NaiveDate>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .ok_or_else(|| AppError::InvalidDate(value.to_string()))
}
