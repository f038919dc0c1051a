mod blob;
mod config;
mod entries;

pub use blob::{BlobStore, MemoryStore, SqliteStore};
pub use config::Config;
pub use entries::{EntryStore, ENTRIES_KEY, STREAK_KEY};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns the BrightDay data directory, creating it if needed.
///
/// Resolution order:
/// - `BRIGHTDAY_DATA_DIR` if set (tests and embedders point this at a
///   scratch directory);
/// - `~/.config/brightday-dev/` when `BRIGHTDAY_ENV=dev`;
/// - `~/.config/brightday/` otherwise.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    if let Ok(dir) = std::env::var("BRIGHTDAY_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BRIGHTDAY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("brightday-dev")
    } else {
        base_dir.join("brightday")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
