use crate::source::SourceKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for labhub
/// Instructor resource hub: LiveLab schedules and announcement templates
#[derive(Parser)]
#[command(
    name = "labhub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Instructor resource hub: LiveLab schedules, Friday announcement templates and end-of-LiveLab reminders",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding `<section>.csv` files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Where to read the schedule from (default: config `source`)
    #[arg(global = true, long, value_enum)]
    pub source: Option<SourceKind>,

    /// Calendar year for schedule dates (default: config `schedule_year`, then the current year)
    #[arg(global = true, long)]
    pub year: Option<i32>,

    /// Ignore cached remote data and fetch again
    #[arg(global = true, long)]
    pub refresh: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the data directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// List the sections available in the data directory
    Sections,

    /// Show the LiveLab schedule of a section
    Schedule {
        /// Section name, e.g. "DA Section 1A"
        section: String,
    },

    /// Friday announcement templates
    Announce {
        /// Section name, e.g. "DA Section 1A"
        section: String,

        #[arg(
            long,
            value_name = "DATE",
            help = "Single announcement for this date (MM-DD-YYYY or YYYY-MM-DD); default: every Friday"
        )]
        date: Option<String>,

        #[arg(long, help = "Track to announce for (default: track of the first row)")]
        track: Option<String>,

        #[arg(long, help = "Wave section (default: wave section of the first row)")]
        wave: Option<String>,

        #[arg(
            long = "all-waves",
            requires = "date",
            conflicts_with = "wave",
            help = "With --date: one announcement per wave section of the track"
        )]
        all_waves: bool,

        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    /// SkillBuilder watch-by schedules
    Watch {
        section: String,
    },

    /// End-of-LiveLab reminders
    Reminders {
        section: String,

        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },
}
