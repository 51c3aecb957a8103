//! Per-invocation view state: which section source, which year, which policy.
//! Built once in `run()` and handed to every command handler.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config::policy::MilestonePolicy;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::source::{ScheduleSource, SourceKind, open_source};
use crate::ui::messages::{info, warning};
use crate::utils::date::current_year;

pub struct ViewContext {
    pub cfg: Config,
    pub source: SourceKind,
    pub year: i32,
    pub refresh: bool,
}

impl ViewContext {
    /// Command-line flags win over the configuration file.
    pub fn new(cli: &Cli, mut cfg: Config) -> Self {
        if let Some(dir) = &cli.data_dir {
            cfg.data_dir = dir.clone();
        }
        let source = cli.source.unwrap_or(cfg.source);
        let year = cli.year.or(cfg.schedule_year).unwrap_or_else(current_year);
        Self {
            cfg,
            source,
            year,
            refresh: cli.refresh,
        }
    }

    pub fn open_source(&self) -> AppResult<Box<dyn ScheduleSource>> {
        open_source(&self.cfg, self.source, self.refresh)
    }

    pub fn policy(&self) -> AppResult<MilestonePolicy> {
        self.cfg.policy()
    }

    /// Load a section; `chatty` prints progress and the row-count check.
    pub fn load_schedule(&self, section: &str, chatty: bool) -> AppResult<Schedule> {
        let source = self.open_source()?;
        if chatty {
            info(format!(
                "Loading data for {} from {}...",
                section,
                source.describe()
            ));
        }

        let schedule = source.load(section, self.year)?;

        if chatty && schedule.is_incomplete(self.cfg.min_expected_labs) {
            let hint = match self.source {
                SourceKind::Local => " Try `--source remote` for the most up-to-date version.",
                SourceKind::Remote => "",
            };
            warning(format!(
                "Only {} LiveLabs loaded from {}. This might be incomplete.{}",
                schedule.titled_labs(),
                section,
                hint
            ));
        }
        Ok(schedule)
    }
}
