//! SkillBuilder watch-by tables.
//!
//! A section sheet can hold two consecutive programs; lab numbering starts
//! over when the second one begins. Each part gets its own watch-by table.

use crate::models::ScheduleRow;
use crate::utils::date::add_ordinal_suffix;
use crate::utils::{md_bold, text_or};
use chrono::NaiveDate;

/// Index of the first row whose lab number drops below the highest number
/// seen so far. Rows without a number never trigger a reset.
pub fn reset_index(rows: &[ScheduleRow]) -> Option<usize> {
    let mut highest: Option<u32> = None;
    for (i, row) in rows.iter().enumerate() {
        let Some(n) = row.lab_number() else {
            continue;
        };
        if highest.is_some_and(|h| n < h) {
            return Some(i);
        }
        highest = Some(highest.map_or(n, |h| h.max(n)));
    }
    None
}

/// Split at the lab-number reset. The second part is empty without one.
pub fn split_by_ll_reset(rows: &[ScheduleRow]) -> (&[ScheduleRow], &[ScheduleRow]) {
    match reset_index(rows) {
        Some(i) => rows.split_at(i),
        None => (rows, &[]),
    }
}

/// Earliest date in a part, used to place its table in the feed.
pub fn part_start(rows: &[ScheduleRow]) -> Option<NaiveDate> {
    rows.iter().filter_map(|r| r.date).min()
}

pub fn build_watch_markdown(rows: &[ScheduleRow], part: u8) -> String {
    let mut out = format!("### 📆 SkillBuilder Watch By Schedule (Part {part})\n\n");

    let entries: Vec<String> = rows
        .iter()
        .filter_map(|row| {
            let video = row.watch_before.as_deref()?;
            Some(format!(
                "- {}: watch by {} (LiveLab {}: {})",
                md_bold(video),
                md_bold(&row.date_display()),
                row.lab_label(),
                text_or(row.title.as_deref(), "Untitled LiveLab")
            ))
        })
        .collect();

    if entries.is_empty() {
        out.push_str("_No SkillBuilders listed for this part of the schedule._\n");
    } else {
        out.push_str(&entries.join("\n"));
        out.push('\n');
    }
    out
}

/// Start date of a part for headings, e.g. `Monday, September 1st`.
pub fn part_label(rows: &[ScheduleRow]) -> String {
    add_ordinal_suffix(part_start(rows))
}
