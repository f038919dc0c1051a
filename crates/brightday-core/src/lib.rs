//! # BrightDay Core Library
//!
//! Core business logic for BrightDay, a daily habit companion: log one
//! entry per day ("on track" or "slipped") with an optional gratitude
//! note, and derive streaks, insights, and calendar views from the log.
//! The CLI binary and any GUI shell are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Entry Store**: keyed storage of daily entries with
//!   insert-or-replace-by-date semantics over a pluggable blob store
//! - **Streak Calculator**: pure derivation of current/longest streak
//!   and last slip date, cached by the store and recomputed on every
//!   write
//! - **Insights / Calendar**: pure views over the entry collection
//! - **Messages**: static encouragement tables with uniform-random
//!   selection
//!
//! ## Key Components
//!
//! - [`EntryStore`]: durable entry log with derived streak cache
//! - [`derive_streaks`]: the streak derivation itself
//! - [`BlobStore`]: the only I/O boundary the core assumes
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod entry;
pub mod error;
pub mod insights;
pub mod messages;
pub mod storage;
pub mod streak;

pub use calendar::{month_grid, CalendarDay, MonthGrid};
pub use entry::{parse_date, today_local, DailyEntry, Status};
pub use error::{ConfigError, CoreError, StoreError};
pub use insights::{build_report, encouragement, InsightsReport};
pub use storage::{data_dir, BlobStore, Config, EntryStore, MemoryStore, SqliteStore};
pub use streak::{derive_streaks, StreakState};
