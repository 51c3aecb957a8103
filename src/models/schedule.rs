use super::row::{RawRow, ScheduleRow};
use chrono::NaiveDate;
use serde::Serialize;

/// All rows loaded for one section, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub section: String,
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn new(section: &str, rows: Vec<ScheduleRow>) -> Self {
        Self {
            section: section.to_string(),
            rows,
        }
    }

    /// Normalize raw rows, dropping entirely blank ones.
    pub fn from_raw_rows(section: &str, raw: &[RawRow], year: i32) -> Self {
        let rows = raw
            .iter()
            .filter(|r| !r.is_blank())
            .map(|r| ScheduleRow::from_raw(r, section, year))
            .collect();
        Self::new(section, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows with a LiveLab title.
    pub fn titled_labs(&self) -> usize {
        self.rows.iter().filter(|r| r.title.is_some()).count()
    }

    pub fn is_incomplete(&self, min_expected: usize) -> bool {
        self.titled_labs() < min_expected
    }

    /// Track of the first row; a section sheet carries a single track.
    pub fn track(&self) -> Option<&str> {
        self.rows.first().map(|r| r.track.as_str())
    }

    /// Wave section of the first row.
    pub fn wave_section(&self) -> Option<&str> {
        self.rows.first().map(|r| r.wave_section.as_str())
    }

    /// Earliest and latest parsed dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.rows.iter().filter_map(|r| r.date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Distinct wave sections of a track, in order of first appearance.
    pub fn wave_sections(&self, track: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for row in self.rows.iter().filter(|r| r.track == track) {
            if !out.contains(&row.wave_section.as_str()) {
                out.push(&row.wave_section);
            }
        }
        out
    }

    /// Dated rows of one track and wave section, in sheet order.
    pub fn dated_rows<'a>(
        &'a self,
        track: &'a str,
        wave_section: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleRow> + 'a {
        self.rows.iter().filter(move |r| {
            r.track == track && r.wave_section == wave_section && r.date.is_some()
        })
    }
}
