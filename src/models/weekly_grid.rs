use super::day_record::DayRecord;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RATE: f64 = 15.00;

/// The fixed, ordered 7-day week that ends on `ending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub ending: Weekday,
}

impl Week {
    pub fn ending_on(ending: Weekday) -> Self {
        Self { ending }
    }

    pub fn start(&self) -> Weekday {
        self.ending.succ()
    }

    /// Weekdays in tracking order, first day first, `ending` last.
    pub fn days(&self) -> [Weekday; 7] {
        let mut out = [self.start(); 7];
        for i in 1..7 {
            out[i] = out[i - 1].succ();
        }
        out
    }

    /// Position of `day` inside this week (0 = first tracked day).
    pub fn index_of(&self, day: Weekday) -> usize {
        let start = self.start().num_days_from_monday();
        ((day.num_days_from_monday() + 7 - start) % 7) as usize
    }
}

impl Default for Week {
    fn default() -> Self {
        Self::ending_on(Weekday::Thu)
    }
}

/// Seven day records in week order plus the hourly rate.
///
/// Once created every weekday stays present, even when all its cells are
/// cleared again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGrid {
    pub week: Week,
    pub days: [DayRecord; 7],
    pub rate: f64,
}

impl WeeklyGrid {
    pub fn new(week: Week, rate: f64) -> Self {
        Self {
            week,
            days: Default::default(),
            rate,
        }
    }

    pub fn day(&self, day: Weekday) -> &DayRecord {
        &self.days[self.week.index_of(day)]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayRecord {
        let idx = self.week.index_of(day);
        &mut self.days[idx]
    }

    /// `(weekday, record)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayRecord)> {
        self.week.days().into_iter().zip(self.days.iter())
    }
}
