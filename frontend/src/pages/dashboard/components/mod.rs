mod recent;
mod stats;

pub use recent::RecentAttendance;
pub use stats::{StatCard, StatsGrid};
