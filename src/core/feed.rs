//! The announcement stream of a section: one post per Friday, with the
//! watch-by tables placed where each part of the schedule begins.

use super::announcement::{Announcement, generate_friday_messages};
use super::watch::{build_watch_markdown, part_start, split_by_ll_reset};
use crate::config::policy::MilestonePolicy;
use crate::models::Schedule;
use crate::utils::date::get_fridays_between;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    WatchSchedule { part: u8, markdown: String },
    Announcement(Box<Announcement>),
    /// A section that could not get a post for this Friday.
    Skipped {
        anchor: NaiveDate,
        section: String,
        reason: String,
    },
    /// The schedule carries no parseable dates at all.
    NoDates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub items: Vec<FeedItem>,
}

impl Feed {
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.items.iter().filter_map(|item| match item {
            FeedItem::Announcement(a) => Some(a.as_ref()),
            _ => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, FeedItem::Skipped { .. }))
            .count()
    }
}

/// Track and wave section default to those of the first row of the sheet.
pub fn build_feed(
    schedule: &Schedule,
    track: Option<&str>,
    wave_section: Option<&str>,
    policy: &MilestonePolicy,
) -> Feed {
    let mut items = Vec::new();

    let (part1, part2) = split_by_ll_reset(&schedule.rows);
    items.push(FeedItem::WatchSchedule {
        part: 1,
        markdown: build_watch_markdown(part1, 1),
    });
    let part2_start = part_start(part2);

    let Some((start, end)) = schedule.date_range() else {
        items.push(FeedItem::NoDates);
        return Feed { items };
    };

    let track = track.or(schedule.track()).unwrap_or_default();
    let section = wave_section.or(schedule.wave_section());
    let mut part2_pending = !part2.is_empty();

    for friday in get_fridays_between(start, end) {
        if part2_pending && part2_start.is_some_and(|s| friday >= s) {
            items.push(FeedItem::WatchSchedule {
                part: 2,
                markdown: build_watch_markdown(part2, 2),
            });
            part2_pending = false;
        }

        for (sec, result) in generate_friday_messages(schedule, track, friday, section, policy) {
            items.push(match result {
                Ok(a) => FeedItem::Announcement(Box::new(a)),
                Err(e) => FeedItem::Skipped {
                    anchor: friday,
                    section: sec,
                    reason: e.to_string(),
                },
            });
        }
    }

    if part2_pending {
        items.push(FeedItem::WatchSchedule {
            part: 2,
            markdown: build_watch_markdown(part2, 2),
        });
    }

    Feed { items }
}
