//! Configuration file checks used by `labhub config --check`.

use super::Config;
use super::policy::DueDayTable;
use crate::source::SourceKind;
use serde_yaml::Value;
use std::collections::HashSet;

const KNOWN_KEYS: &[&str] = &[
    "data_dir",
    "source",
    "spreadsheet_id",
    "sheets_api_key",
    "cache_ttl_secs",
    "min_expected_labs",
    "schedule_year",
    "due_days",
    "project_due_dates",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Key absent from the file; the default applies.
    Missing(&'static str),
    /// Key present in the file but not understood.
    Unknown(String),
    /// The file cannot be used as-is.
    Invalid(String),
}

impl Finding {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Finding::Invalid(_))
    }
}

/// Inspect raw YAML for missing or unknown keys, then validate the values.
pub fn check_config(content: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let value: Value = match serde_yaml::from_str(content) {
        Ok(v) => v,
        Err(e) => return vec![Finding::Invalid(format!("not valid YAML: {e}"))],
    };

    if let Some(map) = value.as_mapping() {
        for key in KNOWN_KEYS {
            if !map.contains_key(*key) {
                findings.push(Finding::Missing(*key));
            }
        }
        for key in map.keys() {
            let name = key.as_str().unwrap_or_default();
            if !KNOWN_KEYS.contains(&name) {
                findings.push(Finding::Unknown(name.to_string()));
            }
        }
    } else if !value.is_null() {
        return vec![Finding::Invalid("top level is not a mapping".into())];
    } else {
        findings.extend(KNOWN_KEYS.iter().map(|k| Finding::Missing(*k)));
    }

    let cfg = match Config::from_yaml(content) {
        Ok(c) => c,
        Err(e) => {
            findings.push(Finding::Invalid(e.to_string()));
            return findings;
        }
    };

    if let Err(e) = DueDayTable::from_rules(&cfg.due_days) {
        findings.push(Finding::Invalid(e.to_string()));
    }

    let mut seen = HashSet::new();
    for suffix in cfg.due_days.iter().flat_map(|r| r.suffixes.iter()) {
        if !seen.insert(suffix.trim().to_string()) {
            findings.push(Finding::Invalid(format!(
                "suffix {suffix} appears in more than one due_days rule"
            )));
        }
    }

    if cfg.source == SourceKind::Remote && cfg.spreadsheet_id.trim().is_empty() {
        findings.push(Finding::Invalid(
            "source is remote but spreadsheet_id is empty".into(),
        ));
    }

    findings
}
