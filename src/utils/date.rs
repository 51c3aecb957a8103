//! Date utilities: schedule date parsing, ordinal formatting, Friday arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder shown wherever a row has no usable date.
pub const UNKNOWN_DATE: &str = "Unknown Date";

static SCHEDULE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^,]*,\s+(\d{1,2})/(\d{1,2})(?:\s|$)").expect("schedule date pattern")
});

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Extract MM/DD from strings like `Monday, 09/01 SKIPPED FOR HOLIDAY!`.
///
/// Returns `None` for anything that does not carry a valid month/day after the
/// first comma; callers treat that as "Unknown Date".
pub fn clean_and_parse_date(text: &str, year: i32) -> Option<NaiveDate> {
    let caps = SCHEDULE_DATE.captures(text.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an announcement date given on the command line.
/// Accepts `MM-DD-YYYY` and `YYYY-MM-DD`.
pub fn parse_anchor(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%m-%d-%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn ordinal_day(day: u32) -> String {
    format!("{}{}", day, ordinal_suffix(day))
}

/// `Monday, September 1st`, or [`UNKNOWN_DATE`] when there is no date.
pub fn add_ordinal_suffix(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{} {}", d.format("%A, %B"), ordinal_day(d.day())),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// The same day when it already is a Friday, otherwise the Friday before it.
pub fn adjust_to_most_recent_friday(date: NaiveDate) -> NaiveDate {
    let back = (date.weekday().num_days_from_monday() + 7
        - Weekday::Fri.num_days_from_monday())
        % 7;
    date - Duration::days(back as i64)
}

/// First date on or after `from` falling on `weekday` (same day allowed).
/// `None` past the end of the calendar.
pub fn next_weekday_on_or_after(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    from.checked_add_days(Days::new(u64::from(ahead)))
}

/// Weekly sequence of Fridays inside an inclusive date range.
///
/// Cloning the value restarts the sequence from its first Friday.
#[derive(Debug, Clone)]
pub struct Fridays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Fridays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.checked_add_signed(Duration::weeks(1));
        Some(current)
    }
}

pub fn get_fridays_between(start: NaiveDate, end: NaiveDate) -> Fridays {
    Fridays {
        next: next_weekday_on_or_after(start, Weekday::Fri),
        end,
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse `Wednesday` / `wed` (any case) into a weekday.
pub fn parse_weekday(name: &str) -> AppResult<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekday(name.to_string()))
}
