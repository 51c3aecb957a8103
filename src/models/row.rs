use crate::utils::date::{add_ordinal_suffix, clean_and_parse_date};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static LAB_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("lab number pattern"));

/// A schedule row exactly as read from a CSV file or a worksheet.
/// Column names follow the shared curriculum spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "LL_num", default)]
    pub ll_num: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub livelab_title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub videos_watch_by: Option<String>,
    #[serde(default)]
    pub assignment_due_after: Option<String>,
    #[serde(default)]
    pub wave_section: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
}

impl RawRow {
    /// Build a row from a header line and one line of cells.
    /// Unknown headers are ignored; missing cells stay empty.
    pub fn from_cells(headers: &[String], cells: &[String]) -> Self {
        let mut row = RawRow::default();
        for (header, cell) in headers.iter().zip(cells) {
            let value = Some(cell.clone());
            match header.trim() {
                "LL_num" => row.ll_num = value,
                "date" => row.date = value,
                "livelab_title" => row.livelab_title = value,
                "notes" => row.notes = value,
                "videos_watch_by" => row.videos_watch_by = value,
                "assignment_due_after" => row.assignment_due_after = value,
                "wave_section" => row.wave_section = value,
                "track" => row.track = value,
                _ => {}
            }
        }
        row
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.ll_num,
            &self.date,
            &self.livelab_title,
            &self.notes,
            &self.videos_watch_by,
            &self.assignment_due_after,
            &self.wave_section,
            &self.track,
        ]
        .iter()
        .all(|f| clean(f).is_none())
    }
}

/// Trim a cell; blank cells count as absent.
fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// One LiveLab session of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub ll_num: Option<String>,
    pub date_text: Option<String>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub watch_before: Option<String>,
    pub due_after: Option<String>,
    pub wave_section: String,
    pub track: String,
    /// Sheet or file the row was loaded from.
    pub section: String,
}

impl ScheduleRow {
    /// Normalize a raw row. `wave_section` falls back to the section name.
    pub fn from_raw(raw: &RawRow, section: &str, year: i32) -> Self {
        let date_text = clean(&raw.date);
        let date = date_text
            .as_deref()
            .and_then(|t| clean_and_parse_date(t, year));

        Self {
            ll_num: clean(&raw.ll_num),
            date,
            date_text,
            title: clean(&raw.livelab_title),
            notes: clean(&raw.notes),
            watch_before: clean(&raw.videos_watch_by),
            due_after: clean(&raw.assignment_due_after),
            wave_section: clean(&raw.wave_section).unwrap_or_else(|| section.to_string()),
            track: clean(&raw.track).unwrap_or_default(),
            section: section.to_string(),
        }
    }

    pub fn date_display(&self) -> String {
        add_ordinal_suffix(self.date)
    }

    /// Lab number as written in the sheet, or `?`.
    pub fn lab_label(&self) -> &str {
        self.ll_num.as_deref().unwrap_or("?")
    }

    /// First integer in `LL_num` (`LL 3` → 3).
    pub fn lab_number(&self) -> Option<u32> {
        let text = self.ll_num.as_deref()?;
        LAB_NUMBER.find(text)?.as_str().parse().ok()
    }

    pub fn is_holiday(&self) -> bool {
        self.title
            .as_deref()
            .map(|t| t.trim().eq_ignore_ascii_case("holiday"))
            .unwrap_or(false)
    }
}
