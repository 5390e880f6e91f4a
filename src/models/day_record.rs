use super::time_of_day::TimeEntry;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A deducted rest or meal period. Either end may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: TimeEntry,
    pub end: TimeEntry,
}

impl BreakWindow {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: TimeEntry::new(start),
            end: TimeEntry::new(end),
        }
    }
}

/// One weekday's raw entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub clock_in: TimeEntry,
    pub clock_out: TimeEntry,
    pub break1: BreakWindow,
    pub meal: BreakWindow,
    pub break2: BreakWindow,
}

impl DayRecord {
    /// The three break windows in grid order.
    pub fn breaks(&self) -> [&BreakWindow; 3] {
        [&self.break1, &self.meal, &self.break2]
    }

    pub fn cell(&self, cell: GridCell) -> &TimeEntry {
        match cell {
            GridCell::In => &self.clock_in,
            GridCell::Break1In => &self.break1.start,
            GridCell::Break1Out => &self.break1.end,
            GridCell::MealIn => &self.meal.start,
            GridCell::MealOut => &self.meal.end,
            GridCell::Break2In => &self.break2.start,
            GridCell::Break2Out => &self.break2.end,
            GridCell::Out => &self.clock_out,
        }
    }

    pub fn cell_mut(&mut self, cell: GridCell) -> &mut TimeEntry {
        match cell {
            GridCell::In => &mut self.clock_in,
            GridCell::Break1In => &mut self.break1.start,
            GridCell::Break1Out => &mut self.break1.end,
            GridCell::MealIn => &mut self.meal.start,
            GridCell::MealOut => &mut self.meal.end,
            GridCell::Break2In => &mut self.break2.start,
            GridCell::Break2Out => &mut self.break2.end,
            GridCell::Out => &mut self.clock_out,
        }
    }

    pub fn is_empty(&self) -> bool {
        GridCell::ALL.iter().all(|c| self.cell(*c).is_blank())
    }
}

/// Addressable cells of a grid row, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GridCell {
    In,
    #[value(name = "break1-in")]
    Break1In,
    #[value(name = "break1-out")]
    Break1Out,
    MealIn,
    MealOut,
    #[value(name = "break2-in")]
    Break2In,
    #[value(name = "break2-out")]
    Break2Out,
    Out,
}

impl GridCell {
    pub const ALL: [GridCell; 8] = [
        GridCell::In,
        GridCell::Break1In,
        GridCell::Break1Out,
        GridCell::MealIn,
        GridCell::MealOut,
        GridCell::Break2In,
        GridCell::Break2Out,
        GridCell::Out,
    ];

    /// Short column header used by tables and CSV export.
    pub fn header(&self) -> &'static str {
        match self {
            GridCell::In => "In",
            GridCell::Break1In => "B1 In",
            GridCell::Break1Out => "B1 Out",
            GridCell::MealIn => "M In",
            GridCell::MealOut => "M Out",
            GridCell::Break2In => "B2 In",
            GridCell::Break2Out => "B2 Out",
            GridCell::Out => "Out",
        }
    }
}
