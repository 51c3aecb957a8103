//! Schedule data sources.
//!
//! Every source answers one question: "give me the rows for section X".
//! The caller picks the implementation; nothing downstream knows which one
//! produced the rows.

pub mod cache;
pub mod local;
pub mod sheets;

pub use cache::CachedSource;
pub use local::{LocalCsvSource, list_sections};
pub use sheets::SheetsSource;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RawRow, Schedule};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `<data_dir>/<section>.csv`
    #[default]
    Local,
    /// Google Sheets worksheet named after the section, cached on disk
    Remote,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Remote => "remote",
        }
    }
}

pub trait ScheduleSource {
    /// Short human label, e.g. `local file` or `Google Sheets`.
    fn describe(&self) -> String;

    fn fetch(&self, section: &str) -> AppResult<Vec<RawRow>>;

    /// Fetch and normalize into a [`Schedule`].
    fn load(&self, section: &str, year: i32) -> AppResult<Schedule> {
        let raw = self.fetch(section)?;
        Ok(Schedule::from_raw_rows(section, &raw, year))
    }
}

/// Build the source selected for this invocation.
pub fn open_source(
    cfg: &Config,
    kind: SourceKind,
    refresh: bool,
) -> AppResult<Box<dyn ScheduleSource>> {
    match kind {
        SourceKind::Local => Ok(Box::new(LocalCsvSource::new(cfg.data_path()))),
        SourceKind::Remote => {
            if cfg.spreadsheet_id.trim().is_empty() {
                return Err(AppError::Config(
                    "spreadsheet_id is not set; run `labhub config --edit`".into(),
                ));
            }
            let key = cfg.api_key().ok_or_else(|| {
                AppError::Config(format!(
                    "no Google Sheets API key: set sheets_api_key or {}",
                    crate::config::API_KEY_ENV
                ))
            })?;
            let sheets = SheetsSource::new(&cfg.spreadsheet_id, &key)?;
            Ok(Box::new(CachedSource::new(
                sheets,
                Config::cache_dir(),
                cfg.cache_ttl_secs,
                refresh,
            )))
        }
    }
}
