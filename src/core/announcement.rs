//! Friday announcement templates.
//!
//! An [`Announcement`] is plain data selected from one section's rows around
//! a Friday anchor; [`Announcement::render`] turns it into the Markdown text an
//! instructor pastes into HQ. Rendering is deterministic: the same schedule and
//! anchor always produce the same bytes.

use super::milestone::{Milestone, milestone_for_row};
use super::selection::{LabRef, NextLab, Outlook, UpcomingSkillBuilder, partition};
use crate::config::policy::MilestonePolicy;
use crate::errors::{AppError, AppResult};
use crate::models::Schedule;
use crate::utils::date::{add_ordinal_suffix, adjust_to_most_recent_friday};
use crate::utils::md_bold;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

const GREETING: &str = "### Hey everyone! 👋\n\n\
Thanks for hanging out with me in lab this week! Here's what's coming up ⬇️";
const SIGN_OFF: &str = "Have a wonderful weekend, and see you all next week!";

/// Which milestone line the announcement carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MilestoneNotice {
    /// Due after the most recent lab and still ahead of the next one.
    DueAfterLastLab(Milestone),
    /// The next milestone found further down the schedule.
    Upcoming(Milestone),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub anchor: NaiveDate,
    /// Requested date when it was not a Friday.
    pub adjusted_from: Option<NaiveDate>,
    pub section: String,
    pub track: String,
    pub last_lab: LabRef,
    pub milestone: MilestoneNotice,
    pub next_lab: Option<NextLab>,
    pub upcoming_skillbuilder: Option<UpcomingSkillBuilder>,
}

/// Pick the milestone line.
///
/// The last-lab milestone wins while its due date is on or before the next
/// lab (or when there is no next lab); equal dates count as still relevant.
pub fn choose_milestone(
    last: Option<Milestone>,
    next_lab_date: Option<NaiveDate>,
    upcoming: Option<Milestone>,
) -> MilestoneNotice {
    match (last, upcoming) {
        (Some(m), _) if next_lab_date.is_none_or(|next| m.due <= next) => {
            MilestoneNotice::DueAfterLastLab(m)
        }
        (_, Some(m)) => MilestoneNotice::Upcoming(m),
        _ => MilestoneNotice::Nothing,
    }
}

/// Build the announcement for one wave section of `track` on `anchor`.
///
/// An anchor that is not a Friday is moved back to the most recent Friday and
/// the original date is kept in `adjusted_from`.
pub fn generate_announcement(
    schedule: &Schedule,
    track: &str,
    anchor: NaiveDate,
    wave_section: &str,
    policy: &MilestonePolicy,
) -> AppResult<Announcement> {
    let (anchor, adjusted_from) = if anchor.weekday() == Weekday::Fri {
        (anchor, None)
    } else {
        (adjust_to_most_recent_friday(anchor), Some(anchor))
    };

    let (past, future) = partition(schedule.dated_rows(track, wave_section), anchor);

    let last = past
        .first()
        .ok_or_else(|| AppError::NoPastLab(wave_section.to_string()))?;
    let last_lab = LabRef::from_row(last, "Untitled LiveLab")
        .ok_or_else(|| AppError::NoPastLab(wave_section.to_string()))?;

    let outlook = Outlook::from_future(&future, wave_section, policy);
    let milestone = choose_milestone(
        milestone_for_row(policy, wave_section, last),
        outlook.next_lab.as_ref().map(|n| n.lab.date),
        outlook.next_milestone,
    );

    Ok(Announcement {
        anchor,
        adjusted_from,
        section: wave_section.to_string(),
        track: track.to_string(),
        last_lab,
        milestone,
        next_lab: outlook.next_lab,
        upcoming_skillbuilder: outlook.upcoming_skillbuilder,
    })
}

/// One announcement per wave section of `track` (or only `section`).
/// Sections without a past lab yield their error and do not stop the others.
pub fn generate_friday_messages(
    schedule: &Schedule,
    track: &str,
    anchor: NaiveDate,
    section: Option<&str>,
    policy: &MilestonePolicy,
) -> Vec<(String, AppResult<Announcement>)> {
    let sections = match section {
        Some(s) => vec![s],
        None => schedule.wave_sections(track),
    };

    sections
        .into_iter()
        .map(|sec| {
            let result = generate_announcement(schedule, track, anchor, sec, policy);
            (sec.to_string(), result)
        })
        .collect()
}

impl Announcement {
    pub fn title(&self) -> String {
        format!("📢 Post on {}", add_ordinal_suffix(Some(self.anchor)))
    }

    pub fn sanity_check(&self) -> String {
        format!(
            "🔎 INSTRUCTOR SANITY CHECK: The most recent LiveLab was {} on {}",
            md_bold(&format!("{}: {}", self.last_lab.number, self.last_lab.title)),
            add_ordinal_suffix(Some(self.last_lab.date))
        )
    }

    pub fn milestone_line(&self) -> String {
        match &self.milestone {
            MilestoneNotice::DueAfterLastLab(m) => format!(
                "🎯 **Don't forget!** {} is due on {}. Swing by a drop-in session or reach out to the HelpHub with any questions!",
                md_bold(&m.name),
                md_bold(&add_ordinal_suffix(Some(m.due)))
            ),
            MilestoneNotice::Upcoming(m) => format!(
                "🔜 **Heads up!** Your next milestone, {}, is due on {}.",
                m.name,
                md_bold(&add_ordinal_suffix(Some(m.due)))
            ),
            MilestoneNotice::Nothing => "ℹ️ No scheduled milestones to announce.".to_string(),
        }
    }

    /// Next-lab paragraph; holidays carry no SkillBuilder guidance.
    pub fn next_lab_lines(&self) -> Vec<String> {
        let Some(next) = &self.next_lab else {
            return vec!["⏭️ No upcoming LiveLabs scheduled.".to_string()];
        };
        let when = md_bold(&add_ordinal_suffix(Some(next.lab.date)));

        if next.is_holiday {
            return vec![format!(
                "🎉 The next scheduled day, {when}, is a holiday — there will be no LiveLab that day. Enjoy your break!"
            )];
        }

        let mut lines = vec![format!(
            "⏭️ Your next LiveLab is {} on {}. {}",
            md_bold(&next.lab.title),
            when,
            next.description
        )];

        if let Some(video) = &next.watch_before {
            lines.push(format!(
                "🍿 To prepare, please be sure to watch {} before then.",
                md_bold(video)
            ));
        } else if let Some(sb) = &self.upcoming_skillbuilder {
            lines.push(format!(
                "📌 While there's no SkillBuilder due before the next LiveLab, your next one will be {} for {} on {}.",
                md_bold(&sb.name),
                sb.lab,
                md_bold(&add_ordinal_suffix(Some(sb.date)))
            ));
        } else {
            lines.push("📌 No upcoming SkillBuilders found in the schedule.".to_string());
        }
        lines
    }

    /// Text to paste into HQ, without the instructor-only lines.
    pub fn body(&self) -> String {
        let mut parts = vec![GREETING.to_string(), self.milestone_line()];
        parts.push(self.next_lab_lines().join("\n"));
        parts.push(SIGN_OFF.to_string());
        parts.join("\n\n")
    }

    /// Full block: title, sanity check, body.
    pub fn render(&self) -> String {
        format!(
            "## {}\n\n> {}\n\n{}\n",
            self.title(),
            self.sanity_check(),
            self.body()
        )
    }
}
