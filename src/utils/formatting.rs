//! Formatting utilities used for CLI and export outputs.
//!
//! Screen and export both render through these functions, so a given decimal
//! value always reads the same in both places.

pub const ZERO_DURATION: &str = "0 hrs 0 min";
pub const PLACEHOLDER: &str = "--";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decimal hours → `"8 hrs"` / `"8 hrs 15 min"`.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return ZERO_DURATION.to_string();
    }

    let whole = hours.floor() as i64;
    // 8.999 reads "8 hrs 60 min"; minutes are not carried into hours
    let minutes = ((hours - hours.floor()) * 60.0).round() as i64;

    if minutes == 0 {
        format!("{} hrs", whole)
    } else {
        format!("{} hrs {} min", whole, minutes)
    }
}

/// Day totals show a placeholder unless something was actually worked.
pub fn format_day_total(hours: f64) -> String {
    if hours > 0.0 {
        format_duration(hours)
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_hours_decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Raw cell text, or the placeholder when the cell is blank.
pub fn or_placeholder(raw: &str) -> String {
    if raw.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        raw.to_string()
    }
}
