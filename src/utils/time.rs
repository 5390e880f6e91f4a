//! Time utilities: parsing 12-hour clock strings, decimal coercion, minute/hour conversion.

use crate::models::time_of_day::TimeOfDay;

pub fn parse_time(t: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse(t).ok()
}

/// Numeric coercion for hours, prices, totals and rates.
///
/// Blank, unparseable, non-finite or negative input is a zero contribution.
pub fn parse_decimal(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

pub fn minutes_to_hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}
