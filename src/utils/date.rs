use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `fri`, `Friday`, `FRI`, ...
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

/// First date on or after `from` that falls on `ending`.
pub fn next_week_ending(from: NaiveDate, ending: Weekday) -> NaiveDate {
    let ahead = (ending.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    from + Duration::days(i64::from(ahead))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// `2026-10-22` → `Oct 22, 2026`
pub fn format_long_date(d: NaiveDate) -> String {
    format!("{} {}, {}", month_name(d.month()), d.day(), d.year())
}

pub fn format_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Human "last edited" marker: `Today`, `Yesterday` or the long date.
pub fn describe_last_edited(ts: NaiveDateTime, today: NaiveDate) -> String {
    let d = ts.date();
    if d == today {
        "Today".to_string()
    } else if d.succ_opt() == Some(today) {
        "Yesterday".to_string()
    } else {
        format_long_date(d)
    }
}
