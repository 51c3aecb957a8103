//! Milestone policy tables: which weekdays milestones fall due on for each
//! section suffix, plus fixed due dates for specific projects.
//! Both are plain configuration data loaded from the config file.

use crate::errors::AppResult;
use crate::utils::date::{parse_weekday, weekday_name};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const DEFAULT_DUE_DAYS: &[(&[&str], &[Weekday])] = &[
    (&["1A", "2A", "3A"], &[Weekday::Tue, Weekday::Sat]),
    (&["1B", "2B"], &[Weekday::Wed, Weekday::Sun]),
    (&["2C"], &[Weekday::Thu, Weekday::Mon]),
];

/// One row of the due-day table as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDayRule {
    pub suffixes: Vec<String>,
    pub days: Vec<String>,
}

/// Fixed due date for a named milestone in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDueDate {
    pub section: String,
    pub milestone: String,
    pub due: NaiveDate,
}

pub fn default_due_day_rules() -> Vec<DueDayRule> {
    DEFAULT_DUE_DAYS
        .iter()
        .map(|(suffixes, days)| DueDayRule {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            days: days.iter().map(|d| weekday_name(*d).to_string()).collect(),
        })
        .collect()
}

/// Trailing token of a section name: `DA Section 2B` → `2B`.
pub fn section_suffix(section: &str) -> &str {
    section.split_whitespace().last().unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDayTable {
    rules: Vec<(Vec<String>, Vec<Weekday>)>,
}

impl Default for DueDayTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_DUE_DAYS
                .iter()
                .map(|(suffixes, days)| {
                    (
                        suffixes.iter().map(|s| s.to_string()).collect(),
                        days.to_vec(),
                    )
                })
                .collect(),
        }
    }
}

impl DueDayTable {
    pub fn from_rules(rules: &[DueDayRule]) -> AppResult<Self> {
        let mut parsed = Vec::with_capacity(rules.len());
        for rule in rules {
            let days = rule
                .days
                .iter()
                .map(String::as_str)
                .map(parse_weekday)
                .collect::<AppResult<Vec<_>>>()?;
            let suffixes = rule.suffixes.iter().map(|s| s.trim().to_string()).collect();
            parsed.push((suffixes, days));
        }
        Ok(Self { rules: parsed })
    }

    /// Ordered due weekdays for a section; empty when the suffix is unknown.
    pub fn due_days(&self, section: &str) -> Vec<Weekday> {
        let suffix = section_suffix(section);
        self.rules
            .iter()
            .find(|(suffixes, _)| suffixes.iter().any(|s| s == suffix))
            .map(|(_, days)| days.clone())
            .unwrap_or_default()
    }

    /// Same lookup, rendered as full weekday names.
    pub fn due_day_names(&self, section: &str) -> Vec<&'static str> {
        self.due_days(section).into_iter().map(weekday_name).collect()
    }
}

/// Everything needed to turn a milestone name into a due date.
#[derive(Debug, Clone, Default)]
pub struct MilestonePolicy {
    pub due_days: DueDayTable,
    pub overrides: Vec<ProjectDueDate>,
}

impl MilestonePolicy {
    pub fn new(due_days: DueDayTable, overrides: Vec<ProjectDueDate>) -> Self {
        Self {
            due_days,
            overrides,
        }
    }

    pub fn override_for(&self, section: &str, milestone: &str) -> Option<NaiveDate> {
        let section = section.trim();
        let milestone = milestone.trim();
        self.overrides
            .iter()
            .find(|o| {
                o.section.trim().eq_ignore_ascii_case(section)
                    && o.milestone.trim().eq_ignore_ascii_case(milestone)
            })
            .map(|o| o.due)
    }
}
