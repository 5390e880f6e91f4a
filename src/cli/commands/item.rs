use crate::cli::parser::{Commands, ItemAction};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_currency;

/// Add, remove or edit a job line item.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Item { id, action } = cmd {
        match action {
            ItemAction::Add => {
                let item_id = EditLogic::apply(cfg, *id, "item_add", |rec| {
                    let item_id = rec.add_line_item();
                    Ok((item_id, format!("Line item {} added", item_id)))
                })?;
                success(format!("➕ Line item {} added to timesheet #{}.", item_id, id));
            }

            ItemAction::Del { item } => {
                EditLogic::apply(cfg, *id, "item_del", |rec| {
                    rec.remove_line_item(*item)?;
                    Ok(((), format!("Line item {} removed", item)))
                })?;
                success(format!("🗑️ Line item {} removed from timesheet #{}.", item, id));
            }

            ItemAction::Set { item, field, value } => {
                let total = EditLogic::apply(cfg, *id, "item_set", |rec| {
                    rec.update_line_item(*item, *field, value)?;
                    let total = rec
                        .timesheet()
                        .line_items
                        .iter()
                        .find(|i| i.id == *item)
                        .map(|i| i.total)
                        .unwrap_or(0.0);
                    Ok((
                        total,
                        format!("Line item {}: {:?} set to '{}'", item, field, value),
                    ))
                })?;
                success(format!(
                    "✏️ Line item {} updated (total {}).",
                    item,
                    format_currency(total)
                ));
            }
        }
    }

    Ok(())
}
