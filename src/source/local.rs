use super::ScheduleSource;
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use crate::utils::path::csv_stem;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::{Path, PathBuf};

/// Cached schedule tables, one `<section>.csv` per section.
pub struct LocalCsvSource {
    dir: PathBuf,
}

impl LocalCsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, section: &str) -> PathBuf {
        self.dir.join(format!("{section}.csv"))
    }
}

impl ScheduleSource for LocalCsvSource {
    fn describe(&self) -> String {
        format!("local file in {}", self.dir.display())
    }

    fn fetch(&self, section: &str) -> AppResult<Vec<RawRow>> {
        let path = self.path_for(section);
        if !path.is_file() {
            return Err(AppError::SourceNotFound(path.display().to_string()));
        }

        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in rdr.deserialize::<RawRow>() {
            rows.push(record?);
        }
        Ok(rows)
    }
}

/// Section names available in `dir`, sorted.
pub fn list_sections(dir: &Path) -> AppResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(AppError::SourceNotFound(dir.display().to_string()));
    }
    let mut out: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| csv_stem(&entry.path()))
        .collect();
    out.sort();
    Ok(out)
}
