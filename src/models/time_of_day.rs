//! Zone-less wall-clock time, stored as minutes since midnight.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// `h:mm AM`, `hh:mmpm`, ... (hour 1-2 digits, minute exactly 2 digits).
static CLOCK_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])$").expect("valid 12-hour clock pattern")
});

/// A validated time of day in `[0, 1439]`.
///
/// The only way to obtain one is [`TimeOfDay::parse`] (or `FromStr`), so a
/// value of this type is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Parse a 12-hour clock string such as `"8:00 AM"` or `"12:30pm"`.
    pub fn parse(input: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTime(input.to_string());

        let caps = CLOCK_12H.captures(input.trim()).ok_or_else(invalid)?;

        let hour: u16 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u16 = caps[2].parse().map_err(|_| invalid())?;
        let is_pm = caps[3].eq_ignore_ascii_case("pm");

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(invalid());
        }

        let hour24 = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };

        Ok(Self(hour24 * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes from `self` forward to `later`, wrapping past midnight.
    pub fn minutes_until(self, later: TimeOfDay) -> i64 {
        let span = later.minutes() - self.minutes();
        if span < 0 {
            span + MINUTES_PER_DAY
        } else {
            span
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    /// Canonical 12-hour spelling, e.g. `12:05 AM`, `5:00 PM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = (self.hour(), self.minute());
        let suffix = if h < 12 { "AM" } else { "PM" };
        let h12 = match h % 12 {
            0 => 12,
            other => other,
        };
        write!(f, "{}:{:02} {}", h12, m, suffix)
    }
}

/// A grid cell as typed by the user: the raw text plus its parse result.
///
/// Text that does not parse is kept for display and contributes nothing to
/// any computation. Only the raw text is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TimeEntry {
    raw: String,
    parsed: Option<TimeOfDay>,
}

impl TimeEntry {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            parsed: TimeOfDay::parse(raw).ok(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn time(&self) -> Option<TimeOfDay> {
        self.parsed
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<String> for TimeEntry {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<TimeEntry> for String {
    fn from(entry: TimeEntry) -> Self {
        entry.raw
    }
}
