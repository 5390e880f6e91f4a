//! Path utilities: expand ~, derive companion files, sanitize file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `~/.rtimesheet/workbook.json` → `~/.rtimesheet/workbook.log`
pub fn companion_log(workbook: &Path) -> PathBuf {
    workbook.with_extension("log")
}

/// Keep letters, digits, `-` and `_`; everything else becomes `_`.
pub fn sanitize_file_stem(s: &str) -> String {
    let cleaned: String = s
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}
