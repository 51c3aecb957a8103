pub mod row;
pub mod schedule;

pub use row::{RawRow, ScheduleRow};
pub use schedule::Schedule;
