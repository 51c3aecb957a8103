//! Path utilities: expand ~, resolve the data directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// File stem of a `.csv` entry, `None` for anything else.
pub fn csv_stem(path: &Path) -> Option<String> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return None;
    }
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}
