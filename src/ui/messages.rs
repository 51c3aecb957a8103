//! Icon-prefixed, colored status lines.
//! Informational output goes to stdout, errors to stderr.

use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_ADJUST: &str = "🔄";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}

/// Used when an input was corrected rather than rejected.
pub fn adjusted<T: fmt::Display>(msg: T) {
    println!("{} {}", Cyan.bold().paint(ICON_ADJUST), msg);
}

/// Section header, e.g. `==== 📅 LiveLab Schedule`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}\n", Blue.bold().paint(format!("==================== {}", msg)));
}
