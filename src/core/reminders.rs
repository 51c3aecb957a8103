//! End-of-LiveLab reminders: what students should do before the next lab.
//! As in the Friday announcements, a holiday next carries no SkillBuilder line.

use super::milestone::{Milestone, milestone_for_row};
use super::selection::{LabRef, NextLab, Outlook, UpcomingSkillBuilder, partition};
use crate::config::policy::MilestonePolicy;
use crate::models::Schedule;
use crate::utils::date::add_ordinal_suffix;
use crate::utils::md_bold;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub lab: LabRef,
    pub milestone: Option<Milestone>,
    pub next_lab: Option<NextLab>,
    pub upcoming_skillbuilder: Option<UpcomingSkillBuilder>,
}

/// One reminder per dated lab of the section, holidays excluded, by date.
pub fn build_reminders(
    schedule: &Schedule,
    track: &str,
    wave_section: &str,
    policy: &MilestonePolicy,
) -> Vec<Reminder> {
    let mut labs: Vec<_> = schedule
        .dated_rows(track, wave_section)
        .filter(|r| !r.is_holiday())
        .collect();
    labs.sort_by_key(|r| r.date);

    labs.into_iter()
        .filter_map(|row| {
            let lab = LabRef::from_row(row, "Untitled LiveLab")?;
            let (_, future) = partition(schedule.dated_rows(track, wave_section), lab.date);
            let outlook = Outlook::from_future(&future, wave_section, policy);
            Some(Reminder {
                lab,
                milestone: milestone_for_row(policy, wave_section, row),
                next_lab: outlook.next_lab,
                upcoming_skillbuilder: outlook.upcoming_skillbuilder,
            })
        })
        .collect()
}

impl Reminder {
    pub fn render(&self) -> String {
        let mut out = format!(
            "#### 📝 LiveLab {}: {} ({})\n\n",
            self.lab.number,
            self.lab.title,
            add_ordinal_suffix(Some(self.lab.date))
        );
        out.push_str("Thanks for joining today's LiveLab! Before you go, here's what's next:\n\n");

        if let Some(m) = &self.milestone {
            out.push_str(&format!(
                "- 🎯 {} is due on {}.\n",
                md_bold(&m.name),
                md_bold(&add_ordinal_suffix(Some(m.due)))
            ));
        }

        match &self.next_lab {
            Some(next) if next.is_holiday => {
                out.push_str(&format!(
                    "- 🎉 {} is a holiday, so there is no LiveLab that day.\n",
                    md_bold(&add_ordinal_suffix(Some(next.lab.date)))
                ));
            }
            Some(next) => {
                if let Some(video) = &next.watch_before {
                    out.push_str(&format!(
                        "- 🍿 Watch {} before {}.\n",
                        md_bold(video),
                        md_bold(&add_ordinal_suffix(Some(next.lab.date)))
                    ));
                }
                out.push_str(&format!(
                    "- ⏭️ Next LiveLab: {} on {}.\n",
                    md_bold(&next.lab.title),
                    md_bold(&add_ordinal_suffix(Some(next.lab.date)))
                ));
            }
            None => out.push_str("- ⏭️ No upcoming LiveLabs scheduled.\n"),
        }

        let holiday_next = self.next_lab.as_ref().is_some_and(|n| n.is_holiday);
        if let Some(sb) = self.upcoming_skillbuilder.as_ref().filter(|_| !holiday_next) {
            out.push_str(&format!(
                "- 📌 Your next SkillBuilder is {} for {} on {}.\n",
                md_bold(&sb.name),
                sb.lab,
                md_bold(&add_ordinal_suffix(Some(sb.date)))
            ));
        }

        out.push_str("\nSee you next time!\n");
        out
    }
}
