//! Schedule reasoning: milestone dates, announcement content, watch tables,
//! the Friday feed and end-of-lab reminders.

pub mod announcement;
pub mod feed;
pub mod milestone;
pub mod reminders;
pub mod selection;
pub mod watch;

pub use announcement::{
    Announcement, MilestoneNotice, choose_milestone, generate_announcement,
    generate_friday_messages,
};
pub use feed::{Feed, FeedItem, build_feed};
pub use milestone::{Milestone, compute_due_date, milestone_due_date};
pub use reminders::{Reminder, build_reminders};
pub use watch::{build_watch_markdown, split_by_ll_reset};
