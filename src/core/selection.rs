//! Row selection shared by announcements and reminders: split a section's
//! rows around a date and describe what comes next.

use super::milestone::{Milestone, milestone_for_row};
use crate::config::policy::MilestonePolicy;
use crate::models::ScheduleRow;
use crate::utils::formatting::text_or;
use chrono::NaiveDate;
use serde::Serialize;

pub const UPCOMING_LIVELAB: &str = "an upcoming LiveLab";
pub const NO_DESCRIPTION: &str = "No description available 😅";

/// Rows on or before `anchor` (most recent first) and after it (soonest
/// first). Undated rows are left out of both.
pub fn partition<'a>(
    rows: impl IntoIterator<Item = &'a ScheduleRow>,
    anchor: NaiveDate,
) -> (Vec<&'a ScheduleRow>, Vec<&'a ScheduleRow>) {
    let (mut past, mut future): (Vec<&ScheduleRow>, Vec<&ScheduleRow>) = rows
        .into_iter()
        .filter(|r| r.date.is_some())
        .partition(|r| r.date.is_some_and(|d| d <= anchor));

    // Same-day rows: the later sheet row counts as more recent.
    past.reverse();
    past.sort_by(|a, b| b.date.cmp(&a.date));
    future.sort_by_key(|r| r.date);
    (past, future)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabRef {
    pub number: String,
    pub title: String,
    pub date: NaiveDate,
}

impl LabRef {
    /// `None` for undated rows.
    pub fn from_row(row: &ScheduleRow, title_fallback: &str) -> Option<Self> {
        Some(Self {
            number: row.lab_label().to_string(),
            title: text_or(row.title.as_deref(), title_fallback).to_string(),
            date: row.date?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextLab {
    pub lab: LabRef,
    pub description: String,
    pub watch_before: Option<String>,
    pub is_holiday: bool,
}

/// First SkillBuilder found further ahead in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingSkillBuilder {
    pub name: String,
    pub lab: String,
    pub date: NaiveDate,
}

/// What lies ahead of a given point in the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outlook {
    pub next_lab: Option<NextLab>,
    /// Only set when the next lab itself has nothing to watch.
    pub upcoming_skillbuilder: Option<UpcomingSkillBuilder>,
    pub next_milestone: Option<Milestone>,
}

impl Outlook {
    /// `future` must be sorted soonest first, as returned by [`partition`].
    pub fn from_future(future: &[&ScheduleRow], section: &str, policy: &MilestonePolicy) -> Self {
        let next_lab = future.first().and_then(|row| {
            Some(NextLab {
                lab: LabRef::from_row(row, UPCOMING_LIVELAB)?,
                description: text_or(row.notes.as_deref(), NO_DESCRIPTION).to_string(),
                watch_before: row.watch_before.clone(),
                is_holiday: row.is_holiday(),
            })
        });

        let upcoming_skillbuilder = match &next_lab {
            Some(next) if next.watch_before.is_some() => None,
            _ => future.iter().find_map(|row| {
                Some(UpcomingSkillBuilder {
                    name: row.watch_before.clone()?,
                    lab: row.lab_label().to_string(),
                    date: row.date?,
                })
            }),
        };

        let next_milestone = future
            .iter()
            .find(|row| row.due_after.is_some())
            .and_then(|row| milestone_for_row(policy, section, row));

        Self {
            next_lab,
            upcoming_skillbuilder,
            next_milestone,
        }
    }
}
