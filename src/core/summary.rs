//! Builds the read-only export summary from a timesheet.

use crate::core::calculator::grid::aggregate;
use crate::core::ledger::totals;
use crate::export::model::{DayExport, ExportSummary, GridExport, LineItemExport, LineTotalsExport};
use crate::models::day_record::{DayRecord, GridCell};
use crate::models::line_item::LineItem;
use crate::models::timesheet::Timesheet;
use crate::models::weekly_grid::WeeklyGrid;
use crate::utils::date::{format_iso, format_long_date, weekday_name};
use crate::utils::formatting::{
    format_currency, format_day_total, format_duration, format_hours_decimal, or_placeholder,
};

pub fn build_summary(sheet: &Timesheet) -> ExportSummary {
    let line_totals = totals(&sheet.line_items);

    ExportSummary {
        id: sheet.id,
        employee_name: sheet.employee_name.clone(),
        employee_id: sheet.employee_id.clone(),
        foreman_name: sheet.foreman_name.clone(),
        week_ending: format_long_date(sheet.week_ending),
        week_ending_iso: format_iso(sheet.week_ending),
        status: sheet.status.as_str().to_string(),
        last_edited: sheet.last_edited.format("%Y-%m-%d %H:%M").to_string(),
        line_items: sheet.line_items.iter().map(line_item_export).collect(),
        line_totals: LineTotalsExport {
            hours: line_totals.hours,
            hours_display: format_duration(line_totals.hours),
            amount: line_totals.amount,
            amount_display: format_currency(line_totals.amount),
        },
        daily_grid: sheet.daily_time_grid.as_ref().map(grid_export),
        notes: sheet.notes.clone(),
        foreman_signature: sheet.foreman_signature.clone(),
        signature_date: sheet.signature_date.map(format_iso),
        employee_signature: sheet.employee_signature.clone(),
        employee_signature_date: sheet.employee_signature_date.map(format_iso),
    }
}

fn line_item_export(item: &LineItem) -> LineItemExport {
    LineItemExport {
        id: item.id,
        job_name: item.job_name.clone(),
        job_number: item.job_number.clone(),
        job_code: item
            .job_code
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        operation: item.operation.clone(),
        lot_numbers: item.lot_numbers.clone(),
        hours: item.hours.clone(),
        price: item.price.clone(),
        price_display: format_currency(item.price_value()),
        total: item.total,
        total_display: format_currency(item.total),
        total_overridden: item.is_overridden(),
    }
}

fn grid_export(grid: &WeeklyGrid) -> GridExport {
    let totals = aggregate(grid);

    let days = grid
        .iter()
        .zip(totals.days.iter())
        .map(|((day, record), total)| day_export(weekday_name(day), record, total.hours))
        .collect();

    GridExport {
        days,
        grand_total: totals.grand_total,
        grand_total_display: format_duration(totals.grand_total),
        grand_total_decimal: format_hours_decimal(totals.grand_total),
        rate: totals.rate,
        rate_display: format_currency(totals.rate),
        amount: totals.amount,
        amount_display: format_currency(totals.amount),
    }
}

fn day_export(name: &str, record: &DayRecord, hours: f64) -> DayExport {
    let cell = |c: GridCell| or_placeholder(record.cell(c).raw());

    DayExport {
        day: name.to_string(),
        clock_in: cell(GridCell::In),
        break1_in: cell(GridCell::Break1In),
        break1_out: cell(GridCell::Break1Out),
        meal_in: cell(GridCell::MealIn),
        meal_out: cell(GridCell::MealOut),
        break2_in: cell(GridCell::Break2In),
        break2_out: cell(GridCell::Break2Out),
        clock_out: cell(GridCell::Out),
        total: hours,
        total_display: format_day_total(hours),
    }
}
