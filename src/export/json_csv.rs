// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{day_headers, day_to_row, line_item_headers, line_item_to_row};
use crate::export::{ExportSummary, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(summary: &ExportSummary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(summary)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV in sections: header, line items, line totals, daily grid, grid totals.
/// Sections are separated by an empty record, so the writer is flexible.
pub(crate) fn export_csv(summary: &ExportSummary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(["Employee", summary.employee_name.as_str()])?;
    wtr.write_record(["Employee ID", summary.employee_id.as_str()])?;
    wtr.write_record(["Foreman", summary.foreman_name.as_str()])?;
    wtr.write_record(["Week Ending", summary.week_ending.as_str()])?;
    wtr.write_record(["Status", summary.status.as_str()])?;
    wtr.write_record([""])?;

    wtr.write_record(line_item_headers())?;
    for item in &summary.line_items {
        wtr.write_record(line_item_to_row(item))?;
    }
    let lt = &summary.line_totals;
    wtr.write_record(["Total Hours", lt.hours_display.as_str()])?;
    wtr.write_record(["Total Price", lt.amount_display.as_str()])?;

    if let Some(grid) = &summary.daily_grid {
        wtr.write_record([""])?;
        wtr.write_record(day_headers())?;
        for day in &grid.days {
            wtr.write_record(day_to_row(day))?;
        }
        wtr.write_record(["Total Hours", grid.grand_total_display.as_str()])?;
        wtr.write_record(["Rate", grid.rate_display.as_str()])?;
        wtr.write_record(["Total Amount", grid.amount_display.as_str()])?;
    }

    if let Some(d) = &summary.employee_signature_date {
        wtr.write_record(["Employee Signature Date", d.as_str()])?;
    }
    if let Some(d) = &summary.signature_date {
        wtr.write_record(["Foreman Signature Date", d.as_str()])?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
