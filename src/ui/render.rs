//! Terminal views of timesheets.
//!
//! The detail view renders from [`ExportSummary`], the same bundle the export
//! writers receive, so screen and file never disagree on a value.

use crate::export::model::{ExportSummary, day_headers, day_to_row, line_item_headers, line_item_to_row};
use crate::models::timesheet::{Status, Timesheet};
use crate::utils::colors::{RESET, color_for_status, colorize_amount, colorize_optional};
use crate::utils::date::{describe_last_edited, format_long_date};
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// One row per timesheet: id, employee, week ending, last edited, status.
pub fn render_list(sheets: &[Timesheet], today: NaiveDate) -> String {
    let mut table = Table::with_headers(&["ID", "Employee", "Week Ending", "Last Edited", "Status"]);

    for s in sheets {
        let status = format!(
            "{}{}{}",
            color_for_status(s.status == Status::Submitted),
            s.status.as_str(),
            RESET
        );
        table.add_row(vec![
            s.id.to_string(),
            s.employee_name.clone(),
            format_long_date(s.week_ending),
            describe_last_edited(s.last_edited, today),
            status,
        ]);
    }

    table.render()
}

/// The detail view: header, line items with weekly totals, daily grid.
pub fn render_detail(summary: &ExportSummary, separator: &str) -> String {
    let mut out = String::new();
    let rule = separator.repeat(60);

    out.push_str(&bold(&format!("Timesheet for {}", summary.employee_name)));
    out.push('\n');
    out.push_str(&format!(
        "Foreman: {} | Employee ID: {} | Week Ending: {} | Status: {}\n",
        or_na(&summary.foreman_name),
        or_na(&summary.employee_id),
        summary.week_ending,
        summary.status
    ));
    out.push_str(&rule);
    out.push('\n');

    // Line items
    out.push_str(&bold("Line Items"));
    out.push('\n');
    if summary.line_items.is_empty() {
        out.push_str(&colorize_optional("--"));
        out.push('\n');
    } else {
        let mut headers = vec!["ID"];
        headers.extend(line_item_headers());
        let mut table = Table::with_headers(&headers);
        for item in &summary.line_items {
            let mut row = vec![item.id.to_string()];
            let mut cells = line_item_to_row(item);
            if item.total_overridden {
                // manual total
                if let Some(total) = cells.last_mut() {
                    total.push('*');
                }
            }
            row.append(&mut cells);
            table.add_row(row.iter().map(|c| colorize_optional(c)).collect());
        }
        out.push_str(&table.render());
    }

    let lt = &summary.line_totals;
    out.push_str(&format!(
        "Weekly Hours: {}   Total Price: {}\n",
        colorize_optional(&lt.hours_display),
        colorize_amount(&lt.amount_display, lt.amount)
    ));
    out.push_str(&rule);
    out.push('\n');

    // Daily grid
    out.push_str(&bold("Daily Time Grid"));
    out.push('\n');
    match &summary.daily_grid {
        None => {
            out.push_str(&colorize_optional("--"));
            out.push('\n');
        }
        Some(grid) => {
            let mut table = Table::with_headers(&day_headers());
            for day in &grid.days {
                table.add_row(day_to_row(day).iter().map(|c| colorize_optional(c)).collect());
            }
            out.push_str(&table.render());
            out.push_str(&format!(
                "Rate per hour: {}   Grand Total: {} ({} hrs)   Total Amount: {}\n",
                grid.rate_display,
                colorize_optional(&grid.grand_total_display),
                grid.grand_total_decimal,
                colorize_amount(&grid.amount_display, grid.amount)
            ));
        }
    }

    if !summary.notes.is_empty() {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Notes: {}\n", summary.notes));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Employee signature: {} ({})\n",
        signed(&summary.employee_signature),
        summary.employee_signature_date.as_deref().unwrap_or("--")
    ));
    out.push_str(&format!(
        "Foreman signature:  {} ({})\n",
        signed(&summary.foreman_signature),
        summary.signature_date.as_deref().unwrap_or("--")
    ));

    out
}

fn or_na(s: &str) -> &str {
    if s.trim().is_empty() { "N/A" } else { s }
}

fn signed(sig: &Option<String>) -> &'static str {
    if sig.is_some() { "signed" } else { "not signed" }
}
