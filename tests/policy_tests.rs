mod common;
use chrono::Weekday;
use common::date;
use labhub::config::Config;
use labhub::config::check::{Finding, check_config};
use labhub::config::policy::{
    DueDayRule, DueDayTable, MilestonePolicy, ProjectDueDate, section_suffix,
};
use labhub::core::{compute_due_date, milestone_due_date};
use labhub::source::SourceKind;

#[test]
fn default_due_days_by_suffix() {
    let table = DueDayTable::default();
    assert_eq!(table.due_day_names("DA Section 2B"), vec!["Wednesday", "Sunday"]);
    assert_eq!(table.due_day_names("DC Section 1A"), vec!["Tuesday", "Saturday"]);
    assert_eq!(table.due_days("DM Section 2C"), vec![Weekday::Thu, Weekday::Mon]);
    assert!(table.due_days("DA Section 4Z").is_empty());
    assert!(table.due_days("").is_empty());
}

#[test]
fn suffix_is_last_token() {
    assert_eq!(section_suffix("  DA Section 2B "), "2B");
    assert_eq!(section_suffix("2C"), "2C");
    assert_eq!(section_suffix(""), "");
}

#[test]
fn configured_rules_replace_defaults() {
    let rules = vec![DueDayRule {
        suffixes: vec!["9X".into()],
        days: vec!["friday".into(), "Mon".into()],
    }];
    let table = DueDayTable::from_rules(&rules).unwrap();
    assert_eq!(table.due_days("Section 9X"), vec![Weekday::Fri, Weekday::Mon]);
    assert!(table.due_days("DA Section 2B").is_empty());
}

#[test]
fn invalid_weekday_in_rules_is_an_error() {
    let rules = vec![DueDayRule {
        suffixes: vec!["1A".into()],
        days: vec!["Funday".into()],
    }];
    assert!(DueDayTable::from_rules(&rules).is_err());
}

#[test]
fn due_date_is_earliest_configured_weekday() {
    // Monday lab, Wednesday/Sunday section.
    let due = compute_due_date(date(2025, 9, 8), &[Weekday::Wed, Weekday::Sun]);
    assert_eq!(due, Some(date(2025, 9, 10)));

    // Saturday lab: Sunday comes first.
    let due = compute_due_date(date(2025, 9, 13), &[Weekday::Wed, Weekday::Sun]);
    assert_eq!(due, Some(date(2025, 9, 14)));

    // Same day allowed.
    let due = compute_due_date(date(2025, 9, 10), &[Weekday::Wed, Weekday::Sun]);
    assert_eq!(due, Some(date(2025, 9, 10)));

    assert_eq!(compute_due_date(date(2025, 9, 10), &[]), None);
}

#[test]
fn project_override_wins_over_weekday_rule() {
    let policy = MilestonePolicy::new(
        DueDayTable::default(),
        vec![ProjectDueDate {
            section: "DA Section 2B".into(),
            milestone: "Portfolio Project: Analyzing Website Data with the Grammys".into(),
            due: date(2025, 10, 5),
        }],
    );

    let due = milestone_due_date(
        &policy,
        "da section 2b",
        "  portfolio project: analyzing website data with the grammys ",
        date(2025, 9, 8),
    );
    assert_eq!(due, Some(date(2025, 10, 5)));

    let due = milestone_due_date(&policy, "DA Section 2B", "Milestone 1", date(2025, 9, 8));
    assert_eq!(due, Some(date(2025, 9, 10)));
}

#[test]
fn partial_config_uses_defaults() {
    let cfg = Config::from_yaml("data_dir: /srv/schedules\nsource: remote\n").unwrap();
    assert_eq!(cfg.data_dir, "/srv/schedules");
    assert_eq!(cfg.source, SourceKind::Remote);
    assert_eq!(cfg.cache_ttl_secs, 3600);
    assert_eq!(cfg.min_expected_labs, 12);
    assert_eq!(
        cfg.policy().unwrap().due_days.due_day_names("DA Section 1B"),
        vec!["Wednesday", "Sunday"]
    );

    let empty = Config::from_yaml("").unwrap();
    assert_eq!(empty.source, SourceKind::Local);
}

#[test]
fn config_with_overrides_round_trips_through_yaml() {
    let yaml = r#"
due_days:
  - suffixes: ["1A"]
    days: ["Thursday"]
project_due_dates:
  - section: DA Section 1A
    milestone: Portfolio Project
    due: 2025-11-30
"#;
    let cfg = Config::from_yaml(yaml).unwrap();
    let policy = cfg.policy().unwrap();
    assert_eq!(policy.due_days.due_days("DA Section 1A"), vec![Weekday::Thu]);
    assert_eq!(
        policy.override_for("DA Section 1A", "portfolio project"),
        Some(date(2025, 11, 30))
    );
}

#[test]
fn check_reports_missing_unknown_and_invalid() {
    let findings = check_config(
        "source: remote\nspreadsheet_id: ''\ncolour: blue\ndue_days:\n  - suffixes: [1A]\n    days: [Blursday]\n",
    );

    assert!(findings.contains(&Finding::Missing("data_dir")));
    assert!(findings.contains(&Finding::Unknown("colour".into())));
    assert!(findings.iter().any(|f| matches!(f, Finding::Invalid(m) if m.contains("Blursday"))));
    assert!(findings.iter().any(|f| matches!(f, Finding::Invalid(m) if m.contains("spreadsheet_id"))));
}

#[test]
fn check_flags_duplicate_suffixes() {
    let findings = check_config(
        "due_days:\n  - suffixes: [1A]\n    days: [Monday]\n  - suffixes: [1A]\n    days: [Friday]\n",
    );
    assert!(findings.iter().any(|f| f.is_invalid()));
}

#[test]
fn default_config_checks_clean() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();
    let findings = check_config(&yaml);
    assert!(findings.iter().all(|f| !f.is_invalid()), "{findings:?}");
}
