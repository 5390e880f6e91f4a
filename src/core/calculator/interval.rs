//! Net worked time for one in/out pair minus its break windows.
//!
//! Rules, applied in order:
//! 1. missing or unparseable clock-in/out → 0
//! 2. span = out − in, wrapping past midnight for overnight shifts
//! 3. each break with both ends parsed contributes end − start (wrapping);
//!    a break with a missing end contributes 0
//! 4. net = span − Σ breaks, clamped at 0
//! 5. hours = net / 60, not rounded

use crate::models::day_record::{BreakWindow, DayRecord};
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::minutes_to_hours;

/// Minutes deducted for one break window.
pub fn break_minutes(window: &BreakWindow) -> i64 {
    match (window.start.time(), window.end.time()) {
        (Some(start), Some(end)) => start.minutes_until(end),
        _ => 0,
    }
}

/// Net worked minutes, never negative.
pub fn net_minutes(
    clock_in: Option<TimeOfDay>,
    clock_out: Option<TimeOfDay>,
    breaks: &[&BreakWindow],
) -> i64 {
    let (Some(start), Some(end)) = (clock_in, clock_out) else {
        return 0;
    };

    let span = start.minutes_until(end);
    let deducted: i64 = breaks.iter().map(|b| break_minutes(b)).sum();

    (span - deducted).max(0)
}

/// Net worked time as decimal hours.
pub fn interval_hours(
    clock_in: Option<TimeOfDay>,
    clock_out: Option<TimeOfDay>,
    breaks: &[&BreakWindow],
) -> f64 {
    minutes_to_hours(net_minutes(clock_in, clock_out, breaks))
}

/// The daily total for one grid row.
pub fn day_hours(record: &DayRecord) -> f64 {
    interval_hours(
        record.clock_in.time(),
        record.clock_out.time(),
        &record.breaks(),
    )
}
