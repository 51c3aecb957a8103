use crate::errors::{AppError, AppResult};
use crate::source::SourceKind;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod check;
pub mod policy;

use policy::{DueDayRule, DueDayTable, MilestonePolicy, ProjectDueDate, default_due_day_rules};

/// Environment variable consulted when `sheets_api_key` is not set.
pub const API_KEY_ENV: &str = "LABHUB_SHEETS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub sheets_api_key: Option<String>,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_min_labs")]
    pub min_expected_labs: usize,
    #[serde(default)]
    pub schedule_year: Option<i32>,
    #[serde(default = "default_due_day_rules")]
    pub due_days: Vec<DueDayRule>,
    #[serde(default)]
    pub project_due_dates: Vec<ProjectDueDate>,
}

fn default_data_dir() -> String {
    "csv_data".to_string()
}
fn default_cache_ttl() -> u64 {
    3600
}
fn default_min_labs() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            source: SourceKind::default(),
            spreadsheet_id: String::new(),
            sheets_api_key: None,
            cache_ttl_secs: default_cache_ttl(),
            min_expected_labs: default_min_labs(),
            schedule_year: None,
            due_days: default_due_day_rules(),
            project_due_dates: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("labhub")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".labhub")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("labhub.conf")
    }

    /// Directory holding cached remote fetches, one JSON file per section
    pub fn cache_dir() -> PathBuf {
        Self::config_dir().join("cache")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Like [`Config::load`], but a broken file only warns and yields the
    /// defaults. Used by the commands that inspect or repair the file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warning(format!("{e}; using built-in defaults"));
            Self::default()
        })
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// API key from the config file, falling back to the environment.
    pub fn api_key(&self) -> Option<String> {
        self.sheets_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()))
    }

    /// Build the milestone policy; fails on unknown weekday names.
    pub fn policy(&self) -> AppResult<MilestonePolicy> {
        let table = DueDayTable::from_rules(&self.due_days)?;
        Ok(MilestonePolicy::new(table, self.project_due_dates.clone()))
    }

    /// Write a fresh configuration file and create the data directory.
    /// An existing configuration file is left untouched.
    pub fn init_all(data_dir: Option<String>) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let cfg = if path.exists() {
            let mut cfg = Self::load_or_default();
            if let Some(d) = data_dir {
                cfg.data_dir = d;
            }
            cfg
        } else {
            let mut cfg = Self::default();
            if let Some(d) = data_dir {
                cfg.data_dir = d;
            }
            let yaml = serde_yaml::to_string(&cfg)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
            cfg
        };

        let data = cfg.data_path();
        fs::create_dir_all(&data).map_err(|e| {
            AppError::Config(format!("cannot create data dir {}: {}", data.display(), e))
        })?;

        Ok(cfg)
    }
}
