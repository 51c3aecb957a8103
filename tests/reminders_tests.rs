mod common;
use common::{SECTION, date, sample_schedule};
use labhub::config::policy::MilestonePolicy;
use labhub::core::build_reminders;

#[test]
fn one_reminder_per_dated_non_holiday_lab() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());

    let titles: Vec<&str> = reminders.iter().map(|r| r.lab.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Intro", "Data Types", "Cleaning", "Visualization", "Part Two Kickoff", "Review"]
    );
}

#[test]
fn reminder_mentions_milestone_and_holiday() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());
    let cleaning = reminders.iter().find(|r| r.lab.title == "Cleaning").unwrap();

    let m = cleaning.milestone.as_ref().unwrap();
    assert_eq!(m.name, "Milestone 1");
    assert_eq!(m.due, date(2025, 9, 10));
    assert!(cleaning.next_lab.as_ref().unwrap().is_holiday);

    let text = cleaning.render();
    assert!(text.starts_with("#### 📝 LiveLab 3: Cleaning (Monday, September 8th)"));
    assert!(text.contains("- 🎯 **Milestone 1** is due on **Wednesday, September 10th**."));
    assert!(text.contains("**Wednesday, September 10th** is a holiday"));
    assert!(!text.contains("SkillBuilder"));
    assert_eq!(cleaning.upcoming_skillbuilder.as_ref().unwrap().name, "SB3: Dashboards");
}

#[test]
fn reminder_points_to_later_skillbuilder() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());
    let visualization = reminders.iter().find(|r| r.lab.title == "Visualization").unwrap();

    let text = visualization.render();
    assert!(text.contains("Next LiveLab: **Part Two Kickoff**"));
    assert!(text.contains("- 🍿 Watch **SB3: Dashboards** before"));
    assert!(!text.contains("Your next SkillBuilder"));
}

#[test]
fn reminder_asks_to_watch_before_next_lab() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());
    let data_types = reminders.iter().find(|r| r.lab.title == "Data Types").unwrap();

    let text = data_types.render();
    assert!(text.contains("- 🍿 Watch **SB2: Cleaning Basics** before **Monday, September 8th**."));
    assert!(text.contains("- ⏭️ Next LiveLab: **Cleaning** on **Monday, September 8th**."));
    assert!(data_types.upcoming_skillbuilder.is_none());
    assert!(data_types.milestone.is_none());
}

#[test]
fn last_lab_has_nothing_next() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());
    let last = reminders.last().unwrap();
    assert!(last.next_lab.is_none());
    assert!(last.render().contains("No upcoming LiveLabs scheduled."));
}

#[test]
fn reminder_names_next_skillbuilder_when_next_lab_has_none() {
    let schedule = sample_schedule();
    let reminders = build_reminders(&schedule, "DA", SECTION, &MilestonePolicy::default());

    let text = reminders[0].render();
    assert!(text.contains(
        "- 📌 Your next SkillBuilder is **SB2: Cleaning Basics** for 3 on **Monday, September 8th**."
    ));
}
