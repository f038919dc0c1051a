pub mod calendar;
pub mod cheer;
pub mod config;
pub mod entries;
pub mod gratitude;
pub mod insights;
pub mod log;
pub mod reset;
pub mod show;
pub mod streak;
pub mod today;
