//! Daily entry model.
//!
//! One entry per calendar day: a binary status plus optional free-text
//! notes. The date is the entry's unique key and is kept in the canonical
//! `YYYY-MM-DD` form everywhere, including on disk.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Outcome logged for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The user stayed on track.
    Success,
    /// The user slipped.
    Slip,
}

/// One user-logged day.
///
/// `gratitude` and `note` are independent of the status; both are kept
/// optional and omitted from the serialized form when absent, matching
/// the stored JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DailyEntry {
    pub fn new(date: NaiveDate, status: Status) -> Self {
        Self {
            date,
            status,
            gratitude: None,
            note: None,
        }
    }

    /// Entry for today's local calendar date.
    pub fn today(status: Status) -> Self {
        Self::new(today_local(), status)
    }

    pub fn with_gratitude(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.gratitude = if text.is_empty() { None } else { Some(text) };
        self
    }
}

/// Today's date in local calendar time.
///
/// Streak anchoring is defined against the local day, so this is the one
/// place "now" enters the library.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a canonical `YYYY-MM-DD` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| CoreError::InvalidDate {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Status::Slip).unwrap(), "\"slip\"");
    }

    #[test]
    fn entry_roundtrips_through_json() {
        let entry = DailyEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            Status::Success,
        )
        .with_gratitude("sunny walk");

        let json = serde_json::to_string(&entry).unwrap();
        let back: DailyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn absent_notes_are_omitted_from_json() {
        let entry = DailyEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            Status::Slip,
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("gratitude"));
        assert!(!json.contains("note"));
    }

    #[test]
    fn entry_parses_stored_shape() {
        let json = r#"{"date":"2024-03-05","status":"slip","note":"rough day"}"#;
        let entry: DailyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, Status::Slip);
        assert_eq!(entry.note.as_deref(), Some("rough day"));
        assert!(entry.gratitude.is_none());
    }

    #[test]
    fn parse_date_accepts_canonical_form_only() {
        assert!(parse_date("2024-01-10").is_ok());
        assert!(parse_date("01/10/2024").is_err());
        assert!(parse_date("2024-01-10T00:00:00").is_err());
    }

    #[test]
    fn empty_gratitude_is_treated_as_absent() {
        let entry = DailyEntry::today(Status::Success).with_gratitude("");
        assert!(entry.gratitude.is_none());
    }
}
