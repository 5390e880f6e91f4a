use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::{LogEntry, read_entries};
use crate::ui::messages::{header, info};
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "new" | "item_add" => Colour::Green,
        "del" | "item_del" => Colour::Red,
        "edit" | "item_set" | "grid" | "rate" => Colour::Yellow,
        "submit" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = read_entries(&cfg.log_path())?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        for line in format_entries(&entries) {
            println!("{}", line);
        }

        Ok(())
    }
}

/// One aligned, colored line per entry, numbered from 1.
pub fn format_entries(entries: &[LogEntry]) -> Vec<String> {
    let op_targets: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        })
        .collect();

    let op_w = op_targets
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(10)
        .min(MAX_OP_WIDTH);
    let id_w = entries.len().to_string().len();
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

    entries
        .iter()
        .zip(op_targets)
        .enumerate()
        .map(|(i, (entry, op_target))| {
            let color = color_for_operation(&entry.operation);

            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}
