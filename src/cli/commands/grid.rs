use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_weekday, weekday_name};
use crate::utils::formatting::{format_currency, format_day_total};
use crate::utils::time::parse_time;

/// Set or clear one cell of the daily grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
        id,
        day,
        cell,
        value,
        clear,
    } = cmd
    {
        let weekday = parse_weekday(day).ok_or_else(|| AppError::InvalidDay(day.clone()))?;

        let day_total = EditLogic::apply(cfg, *id, "grid", |rec| {
            let msg = match value.as_deref() {
                Some(v) if !*clear => {
                    rec.set_grid_cell(weekday, *cell, v);
                    format!("{} {} set to '{}'", weekday_name(weekday), cell.header(), v)
                }
                _ => {
                    rec.clear_grid_cell(weekday, *cell);
                    format!("{} {} cleared", weekday_name(weekday), cell.header())
                }
            };

            let total = rec
                .grid_totals()
                .and_then(|t| t.days.into_iter().find(|d| d.day == weekday))
                .map(|d| d.hours)
                .unwrap_or(0.0);
            Ok((total, msg))
        })?;

        // garbage is stored as typed but counts for nothing
        if let Some(v) = value
            && !*clear
            && parse_time(v).is_none()
        {
            warning(format!("'{}' is not a valid time (h:mm AM|PM); it will count as empty.", v));
        }

        success(format!(
            "{} total: {}",
            weekday_name(weekday),
            format_day_total(day_total)
        ));
    }

    if let Commands::Rate { id, value } = cmd {
        let rate = EditLogic::apply(cfg, *id, "rate", |rec| {
            rec.set_rate(value);
            let rate = rec.timesheet().rate_per_hour;
            Ok((rate, format!("Rate set to {}", format_currency(rate))))
        })?;

        success(format!("Rate per hour: {}", format_currency(rate)));
    }

    Ok(())
}
