use super::ScheduleSource;
use crate::errors::AppResult;
use crate::models::RawRow;
use crate::ui::messages::warning;
use crate::utils::formatting::slug;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    section: String,
    fetched_at: DateTime<Utc>,
    rows: Vec<RawRow>,
}

/// Wraps a slow source and keeps its answers on disk for a fixed time,
/// keyed by section name.
pub struct CachedSource<S> {
    inner: S,
    dir: PathBuf,
    ttl: Duration,
    refresh: bool,
}

impl<S: ScheduleSource> CachedSource<S> {
    /// `refresh` ignores any stored entry for this instance.
    pub fn new(inner: S, dir: impl Into<PathBuf>, ttl_secs: u64, refresh: bool) -> Self {
        Self {
            inner,
            dir: dir.into(),
            ttl: i64::try_from(ttl_secs)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
            refresh,
        }
    }

    pub fn entry_path(&self, section: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slug(section)))
    }

    /// Same as [`ScheduleSource::fetch`] with an explicit clock.
    pub fn fetch_at(&self, section: &str, now: DateTime<Utc>) -> AppResult<Vec<RawRow>> {
        let path = self.entry_path(section);

        if !self.refresh
            && let Some(entry) = read_entry(&path)
            && entry.section == section
            && now - entry.fetched_at < self.ttl
        {
            return Ok(entry.rows);
        }

        let rows = self.inner.fetch(section)?;
        let entry = CacheEntry {
            section: section.to_string(),
            fetched_at: now,
            rows,
        };

        // Cache write failures are not fatal.
        if let Err(e) = write_entry(&path, &entry) {
            warning(format!("Could not write cache {}: {}", path.display(), e));
        }

        Ok(entry.rows)
    }
}

impl<S: ScheduleSource> ScheduleSource for CachedSource<S> {
    fn describe(&self) -> String {
        format!("{} (cached {}s)", self.inner.describe(), self.ttl.num_seconds())
    }

    fn fetch(&self, section: &str) -> AppResult<Vec<RawRow>> {
        self.fetch_at(section, Utc::now())
    }
}

/// Unreadable or corrupt entries are treated as missing.
fn read_entry(path: &Path) -> Option<CacheEntry> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn write_entry(path: &Path, entry: &CacheEntry) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(entry)?)?;
    Ok(())
}
