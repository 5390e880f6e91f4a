// src/export/model.rs

use serde::Serialize;

/// Fully resolved timesheet snapshot handed to writers and to the screen.
///
/// Every number comes with its display string; consumers only lay it out.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub id: u32,
    pub employee_name: String,
    pub employee_id: String,
    pub foreman_name: String,
    /// `Oct 22, 2026`
    pub week_ending: String,
    /// `2026-10-22`
    pub week_ending_iso: String,
    pub status: String,
    pub last_edited: String,
    pub line_items: Vec<LineItemExport>,
    pub line_totals: LineTotalsExport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_grid: Option<GridExport>,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreman_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_signature_date: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItemExport {
    pub id: u64,
    pub job_name: String,
    pub job_number: String,
    pub job_code: String,
    pub operation: String,
    pub lot_numbers: String,
    /// As entered.
    pub hours: String,
    /// As entered.
    pub price: String,
    /// Parsed price as currency; unparseable input shows `$0.00`.
    pub price_display: String,
    pub total: f64,
    pub total_display: String,
    pub total_overridden: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineTotalsExport {
    pub hours: f64,
    pub hours_display: String,
    pub amount: f64,
    pub amount_display: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridExport {
    pub days: Vec<DayExport>,
    pub grand_total: f64,
    pub grand_total_display: String,
    pub grand_total_decimal: String,
    pub rate: f64,
    pub rate_display: String,
    pub amount: f64,
    pub amount_display: String,
}

/// One grid row: raw cell text (or `--`) and the day total.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayExport {
    pub day: String,
    pub clock_in: String,
    pub break1_in: String,
    pub break1_out: String,
    pub meal_in: String,
    pub meal_out: String,
    pub break2_in: String,
    pub break2_out: String,
    pub clock_out: String,
    pub total: f64,
    /// Formatted duration, or `--` when nothing was worked.
    pub total_display: String,
}

/// Header per la sezione line items (CSV / tabella).
pub(crate) fn line_item_headers() -> Vec<&'static str> {
    vec![
        "Job Name",
        "Job #",
        "Cost Code",
        "Operation",
        "Lot #s",
        "Hrs.",
        "Price",
        "Total",
    ]
}

pub(crate) fn line_item_to_row(item: &LineItemExport) -> Vec<String> {
    vec![
        item.job_name.clone(),
        item.job_number.clone(),
        item.job_code.clone(),
        item.operation.clone(),
        item.lot_numbers.clone(),
        item.hours.clone(),
        item.price.clone(),
        item.total_display.clone(),
    ]
}

/// Header per la sezione daily grid (CSV / tabella).
pub(crate) fn day_headers() -> Vec<&'static str> {
    vec![
        "Day", "In", "B1 In", "B1 Out", "M In", "M Out", "B2 In", "B2 Out", "Out", "Total",
    ]
}

pub(crate) fn day_to_row(day: &DayExport) -> Vec<String> {
    vec![
        day.day.clone(),
        day.clock_in.clone(),
        day.break1_in.clone(),
        day.break1_out.clone(),
        day.meal_in.clone(),
        day.meal_out.clone(),
        day.break2_in.clone(),
        day.break2_out.clone(),
        day.clock_out.clone(),
        day.total_display.clone(),
    ]
}
