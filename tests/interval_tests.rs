use rtimesheet::core::calculator::interval::{break_minutes, day_hours, interval_hours, net_minutes};
use rtimesheet::models::day_record::{BreakWindow, DayRecord};
use rtimesheet::models::time_of_day::{TimeEntry, TimeOfDay};

fn t(s: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse(s).ok()
}

fn day(clock_in: &str, clock_out: &str) -> DayRecord {
    DayRecord {
        clock_in: TimeEntry::new(clock_in),
        clock_out: TimeEntry::new(clock_out),
        ..Default::default()
    }
}

#[test]
fn test_plain_day_is_nine_hours() {
    assert_eq!(day_hours(&day("8:00 AM", "5:00 PM")), 9.0);
}

#[test]
fn test_meal_break_is_deducted() {
    let mut d = day("8:00 AM", "5:00 PM");
    d.meal = BreakWindow::new("12:00 PM", "12:30 PM");
    assert_eq!(day_hours(&d), 8.5);
}

#[test]
fn test_all_three_breaks() {
    let mut d = day("8:00 AM", "5:00 PM");
    d.break1 = BreakWindow::new("10:00 AM", "10:15 AM");
    d.meal = BreakWindow::new("12:00 PM", "12:30 PM");
    d.break2 = BreakWindow::new("2:00 PM", "2:15 PM");
    assert_eq!(day_hours(&d), 8.0);
}

#[test]
fn test_overnight_shift_wraps() {
    assert_eq!(day_hours(&day("10:00 PM", "6:00 AM")), 8.0);
}

#[test]
fn test_shift_starting_at_midnight() {
    // 12:00 AM is minute 0 and still a valid clock-in
    assert_eq!(day_hours(&day("12:00 AM", "8:00 AM")), 8.0);
}

#[test]
fn test_same_in_and_out_is_zero() {
    assert_eq!(day_hours(&day("8:00 AM", "8:00 AM")), 0.0);
}

#[test]
fn test_missing_or_garbled_clock_is_zero() {
    assert_eq!(day_hours(&day("garbage", "5:00 PM")), 0.0);
    assert_eq!(day_hours(&day("8:00 AM", "")), 0.0);
    assert_eq!(day_hours(&day("", "")), 0.0);
    assert_eq!(day_hours(&DayRecord::default()), 0.0);
}

#[test]
fn test_break_crossing_midnight() {
    let b = BreakWindow::new("11:45 PM", "12:15 AM");
    assert_eq!(break_minutes(&b), 30);

    let mut d = day("10:00 PM", "6:00 AM");
    d.meal = b;
    assert_eq!(day_hours(&d), 7.5);
}

#[test]
fn test_half_entered_break_contributes_nothing() {
    assert_eq!(break_minutes(&BreakWindow::new("12:00 PM", "")), 0);
    assert_eq!(break_minutes(&BreakWindow::new("", "12:30 PM")), 0);
    assert_eq!(break_minutes(&BreakWindow::new("noon", "12:30 PM")), 0);

    let mut d = day("8:00 AM", "5:00 PM");
    d.meal = BreakWindow::new("12:00 PM", "");
    assert_eq!(day_hours(&d), 9.0);
}

#[test]
fn test_breaks_longer_than_shift_clamp_to_zero() {
    let b = BreakWindow::new("8:00 AM", "7:00 PM");
    let net = net_minutes(t("8:00 AM"), t("5:00 PM"), &[&b]);
    assert_eq!(net, 0);
}

#[test]
fn test_reversed_break_counts_as_wrapped() {
    // end before start wraps to almost a full day and wipes out the shift
    let b = BreakWindow::new("12:30 PM", "12:00 PM");
    assert_eq!(break_minutes(&b), 1410);
    assert_eq!(interval_hours(t("8:00 AM"), t("5:00 PM"), &[&b]), 0.0);
}

#[test]
fn test_result_is_not_rounded() {
    let hours = interval_hours(t("8:00 AM"), t("8:20 AM"), &[]);
    assert_eq!(hours, 20.0 / 60.0);
}
