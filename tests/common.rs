#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use labhub::models::{RawRow, Schedule};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SECTION: &str = "DA Section 2B";

/// Two-part schedule for a Wednesday/Sunday section, September 2025.
/// Lab numbering restarts at the `Part Two Kickoff` row.
pub const SAMPLE_CSV: &str = r#"LL_num,date,livelab_title,notes,videos_watch_by,assignment_due_after,wave_section,track
1,"Monday, 09/01",Intro,Welcome to the course,SB1: Getting Started,,DA Section 2B,DA
2,"Wednesday, 09/03",Data Types,Numbers and strings,,,DA Section 2B,DA
3,"Monday, 09/08",Cleaning,Tidy data,SB2: Cleaning Basics,Milestone 1,DA Section 2B,DA
4,"Wednesday, 09/10",Holiday,,,,DA Section 2B,DA
5,"Monday, 09/15",Visualization,,,,DA Section 2B,DA
1,"Wednesday, 09/17",Part Two Kickoff,New unit,SB3: Dashboards,Milestone 2,DA Section 2B,DA
2,"Monday, 09/22 SKIPPED FOR HOLIDAY!",Review,Recap,,,DA Section 2B,DA
3,TBD,Capstone,,,,DA Section 2B,DA
"#;

pub fn labhub(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("labhub");
    cmd.env("HOME", home).env_remove("LABHUB_SHEETS_API_KEY");
    cmd
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Temp dir holding `<name>.csv` with the given content.
pub fn data_dir_with(name: &str, csv: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join(format!("{name}.csv")), csv).expect("write csv");
    dir
}

pub fn csv_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(format!("{name}.csv"))
}

/// Parse CSV text the same way the local source does.
pub fn schedule_from_csv(section: &str, csv: &str, year: i32) -> Schedule {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv.as_bytes());
    let rows: Vec<RawRow> = rdr
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("parse csv");
    Schedule::from_raw_rows(section, &rows, year)
}

pub fn sample_schedule() -> Schedule {
    schedule_from_csv(SECTION, SAMPLE_CSV, 2025)
}
