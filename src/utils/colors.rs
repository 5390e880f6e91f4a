/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

fn is_empty_value(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--" || v == "0 hrs 0 min"
}

/// Greys out placeholders and zero durations.
///
/// Esempio:
/// `colorize_optional("--")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if is_empty_value(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Money and totals are shown in green once non-zero.
pub fn colorize_amount(value: &str, amount: f64) -> String {
    if amount > 0.0 {
        format!("{GREEN}{value}{RESET}")
    } else {
        colorize_optional(value)
    }
}

pub fn color_for_status(submitted: bool) -> &'static str {
    if submitted { GREEN } else { YELLOW }
}
