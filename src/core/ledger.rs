//! Ordered job line items and their weekly totals.
//!
//! `total` normally follows `hours × price`. Typing a total by hand switches the
//! item to [`TotalMode::Overridden`]; the next edit of hours or price switches it
//! back to [`TotalMode::Derived`] and recomputes.

use crate::errors::{AppError, AppResult};
use crate::models::line_item::{JobCode, LineField, LineItem, TotalMode};
use crate::utils::time::parse_decimal;

/// Weekly totals of the itemized hours.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerTotals {
    pub hours: f64,
    pub amount: f64,
}

/// Line-item operations over a borrowed item list (insertion order kept).
pub struct Ledger<'a> {
    items: &'a mut Vec<LineItem>,
}

impl<'a> Ledger<'a> {
    pub fn new(items: &'a mut Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Append a blank item and return its id.
    ///
    /// Ids are never reused while a higher id is still present.
    pub fn append(&mut self) -> u64 {
        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.items.push(LineItem::blank(id));
        id
    }

    pub fn remove(&mut self, id: u64) -> AppResult<LineItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(AppError::LineItemNotFound(id))?;
        Ok(self.items.remove(pos))
    }

    pub fn update(&mut self, id: u64, field: LineField, value: &str) -> AppResult<()> {
        // validate before touching the item
        let job_code = if field == LineField::JobCode && !value.trim().is_empty() {
            Some(
                JobCode::from_code(value)
                    .ok_or_else(|| AppError::InvalidJobCode(value.to_string()))?,
            )
        } else {
            None
        };

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(AppError::LineItemNotFound(id))?;

        match field {
            LineField::JobName => item.job_name = value.to_string(),
            LineField::JobNumber => item.job_number = value.to_string(),
            LineField::JobCode => item.job_code = job_code,
            LineField::Operation => item.operation = value.to_string(),
            LineField::LotNumbers => item.lot_numbers = value.to_string(),
            LineField::Hours => {
                item.hours = value.to_string();
                recompute(item);
            }
            LineField::Price => {
                item.price = value.to_string();
                recompute(item);
            }
            LineField::Total => {
                item.total = parse_decimal(value);
                item.total_mode = TotalMode::Overridden;
            }
        }

        Ok(())
    }

    pub fn totals(&self) -> LedgerTotals {
        totals(self.items.as_slice())
    }
}

fn recompute(item: &mut LineItem) {
    item.total = item.hours_value() * item.price_value();
    item.total_mode = TotalMode::Derived;
}

/// Weekly hours = Σ parsed hours, weekly amount = Σ total.
pub fn totals(items: &[LineItem]) -> LedgerTotals {
    items.iter().fold(LedgerTotals::default(), |acc, item| LedgerTotals {
        hours: acc.hours + item.hours_value(),
        amount: acc.amount + item.total,
    })
}
