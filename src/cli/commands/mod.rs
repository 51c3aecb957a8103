pub mod announce;
pub mod config;
pub mod init;
pub mod reminders;
pub mod schedule;
pub mod sections;
pub mod watch;
