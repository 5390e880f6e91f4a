//! Weekly aggregation of the daily in/out grid.

use crate::core::calculator::interval::day_hours;
use crate::models::weekly_grid::WeeklyGrid;
use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    pub day: Weekday,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridTotals {
    /// All seven days in week order, empty days included.
    pub days: Vec<DailyTotal>,
    pub grand_total: f64,
    pub rate: f64,
    pub amount: f64,
}

pub fn aggregate(grid: &WeeklyGrid) -> GridTotals {
    let days: Vec<DailyTotal> = grid
        .iter()
        .map(|(day, record)| DailyTotal {
            day,
            hours: day_hours(record),
        })
        .collect();

    // plain sum of the unrounded daily values, in week order
    let grand_total = days.iter().fold(0.0, |acc, d| acc + d.hours);

    GridTotals {
        days,
        grand_total,
        rate: grid.rate,
        amount: grand_total * grid.rate,
    }
}
