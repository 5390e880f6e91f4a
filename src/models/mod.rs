pub mod day_record;
pub mod line_item;
pub mod time_of_day;
pub mod timesheet;
pub mod weekly_grid;
