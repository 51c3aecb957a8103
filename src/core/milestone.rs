//! Milestone due dates.

use crate::config::policy::MilestonePolicy;
use crate::models::ScheduleRow;
use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::utils::date::next_weekday_on_or_after;

/// A milestone attached to a lab, with its resolved due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: String,
    pub due: NaiveDate,
    /// `LL_num` of the lab the milestone follows.
    pub after_lab: String,
}

/// Earliest of the configured weekdays on or after `lab_date`.
/// `None` when no weekdays are configured.
pub fn compute_due_date(lab_date: NaiveDate, due_days: &[Weekday]) -> Option<NaiveDate> {
    due_days
        .iter()
        .filter_map(|day| next_weekday_on_or_after(lab_date, *day))
        .min()
}

/// Fixed project date when one is configured, else the weekday rule.
pub fn milestone_due_date(
    policy: &MilestonePolicy,
    section: &str,
    milestone: &str,
    lab_date: NaiveDate,
) -> Option<NaiveDate> {
    policy
        .override_for(section, milestone)
        .or_else(|| compute_due_date(lab_date, &policy.due_days.due_days(section)))
}

/// Milestone due after `row`, if the row names one and a due date resolves.
pub fn milestone_for_row(
    policy: &MilestonePolicy,
    section: &str,
    row: &ScheduleRow,
) -> Option<Milestone> {
    let name = row.due_after.as_deref()?;
    let lab_date = row.date?;
    let due = milestone_due_date(policy, section, name, lab_date)?;
    Some(Milestone {
        name: name.to_string(),
        due,
        after_lab: row.lab_label().to_string(),
    })
}
