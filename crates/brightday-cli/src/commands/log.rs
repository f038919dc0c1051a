use brightday_core::{messages, DailyEntry, EntryStore, Status};
use clap::ValueEnum;

/// CLI spelling of the two-day statuses.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogStatus {
    /// You stayed on track today
    OnTrack,
    /// You slipped today
    Slipped,
}

impl From<LogStatus> for Status {
    fn from(value: LogStatus) -> Self {
        match value {
            LogStatus::OnTrack => Status::Success,
            LogStatus::Slipped => Status::Slip,
        }
    }
}

pub fn run(status: LogStatus, gratitude: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let status = Status::from(status);

    let mut entry = DailyEntry::today(status);
    if let Some(text) = gratitude {
        entry = entry.with_gratitude(text);
    }
    let streak = store.upsert_entry(entry)?;

    println!("{}", messages::status_message(status));
    println!(
        "Current streak: {} | Longest streak: {}",
        streak.current_streak, streak.longest_streak
    );
    Ok(())
}
