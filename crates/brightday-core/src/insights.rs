//! Progress insights derived from the entry log.
//!
//! Aggregate counts and windowed success tallies for the "your progress
//! at a glance" view. Like streak derivation this is a pure function of
//! the collection plus an explicit today anchor.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{DailyEntry, Status};

/// Aggregate statistics over the whole entry log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Total days logged
    pub total_entries: u32,
    /// Days logged as on track
    pub success_count: u32,
    /// Days logged as slipped
    pub slip_count: u32,
    /// Success share of all logged days, rounded to a whole percent
    pub success_rate: u32,
    /// On-track days within the trailing 7 days
    pub last_7_days_successes: u32,
    /// On-track days within the trailing 30 days
    pub last_30_days_successes: u32,
}

/// Build the insights report for an entry collection.
pub fn build_report(entries: &[DailyEntry], today: NaiveDate) -> InsightsReport {
    let total = entries.len() as u32;
    let successes = entries
        .iter()
        .filter(|e| e.status == Status::Success)
        .count() as u32;
    let slips = total - successes;

    let success_rate = if total > 0 {
        ((f64::from(successes) / f64::from(total)) * 100.0).round() as u32
    } else {
        0
    };

    InsightsReport {
        total_entries: total,
        success_count: successes,
        slip_count: slips,
        success_rate,
        last_7_days_successes: successes_since(entries, today - Duration::days(7)),
        last_30_days_successes: successes_since(entries, today - Duration::days(30)),
    }
}

/// Success entries dated strictly after `cutoff`.
fn successes_since(entries: &[DailyEntry], cutoff: NaiveDate) -> u32 {
    entries
        .iter()
        .filter(|e| e.status == Status::Success && e.date > cutoff)
        .count() as u32
}

/// Tiered encouragement line for the report, keyed off the success rate.
pub fn encouragement(report: &InsightsReport) -> &'static str {
    if report.success_rate >= 80 {
        "🌟 You're doing amazing! Keep up the incredible work!"
    } else if report.success_rate >= 60 {
        "💪 Great progress! You're building strong habits!"
    } else if report.success_rate >= 40 {
        "🌱 You're growing! Every step counts!"
    } else if report.total_entries > 0 {
        "🌈 Keep going! Progress takes time and you're on the right path!"
    } else {
        "✨ Start your journey today! Every great story begins with a single step."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DailyEntry;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(30)
    }

    #[test]
    fn empty_log_reports_zeroes() {
        let report = build_report(&[], today());
        assert_eq!(report, InsightsReport::default());
        assert!(encouragement(&report).contains("Start your journey"));
    }

    #[test]
    fn counts_and_rate_are_rounded_percent() {
        let entries = vec![
            DailyEntry::new(day(30), Status::Success),
            DailyEntry::new(day(29), Status::Success),
            DailyEntry::new(day(28), Status::Slip),
        ];
        let report = build_report(&entries, today());
        assert_eq!(report.total_entries, 3);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.slip_count, 1);
        // 2/3 rounds to 67
        assert_eq!(report.success_rate, 67);
    }

    #[test]
    fn trailing_windows_exclude_old_successes() {
        let entries = vec![
            DailyEntry::new(day(30), Status::Success),
            DailyEntry::new(day(24), Status::Success),
            // outside the 7-day window, inside the 30-day window
            DailyEntry::new(day(10), Status::Success),
            // outside both windows
            DailyEntry::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), Status::Success),
        ];
        let report = build_report(&entries, today());
        assert_eq!(report.last_7_days_successes, 2);
        assert_eq!(report.last_30_days_successes, 3);
    }

    #[test]
    fn slips_never_count_toward_windows() {
        let entries = vec![
            DailyEntry::new(day(30), Status::Slip),
            DailyEntry::new(day(29), Status::Slip),
        ];
        let report = build_report(&entries, today());
        assert_eq!(report.last_7_days_successes, 0);
        assert_eq!(report.success_rate, 0);
    }

    #[test]
    fn encouragement_tiers_follow_success_rate() {
        let mut report = InsightsReport {
            total_entries: 10,
            success_rate: 85,
            ..Default::default()
        };
        assert!(encouragement(&report).contains("doing amazing"));
        report.success_rate = 65;
        assert!(encouragement(&report).contains("Great progress"));
        report.success_rate = 45;
        assert!(encouragement(&report).contains("growing"));
        report.success_rate = 10;
        assert!(encouragement(&report).contains("Keep going"));
    }
}
