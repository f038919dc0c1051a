//! Streak derivation from the daily entry log.
//!
//! Everything here is a pure function of the entry collection and an
//! explicit "today" anchor; the entry store calls in after every write
//! and caches the result. There is no incremental update: each write
//! recomputes from the full history, which stays cheap at the expected
//! scale of hundreds to low thousands of entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{DailyEntry, Status};

/// Derived streak numbers, cached alongside the entry log.
///
/// Serialized with camelCase field names to match the stored JSON shape
/// (`{"currentStreak": 2, "longestStreak": 5, "lastSlipDate": null}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    /// Consecutive success days ending at today, with no gap.
    pub current_streak: u32,
    /// Longest success run anywhere in history.
    pub longest_streak: u32,
    /// Date of the most recent slip, if any slip was ever logged.
    pub last_slip_date: Option<NaiveDate>,
}

/// Derive streak state from an entry collection.
///
/// The collection is re-sorted descending by date before scanning, so
/// callers other than the entry store need not uphold the sort invariant
/// themselves. Duplicate dates are a store-invariant violation; the scan
/// does not define a result for them beyond the debug assertion.
///
/// The current streak is anchored at `today`: a collection with no entry
/// for today yields zero even if yesterday ended a long success run. The
/// longest streak counts runs by position in the sorted sequence, not by
/// calendar adjacency (see `longest_success_run`).
pub fn derive_streaks(entries: &[DailyEntry], today: NaiveDate) -> StreakState {
    let mut sorted: Vec<&DailyEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    debug_assert!(
        sorted.windows(2).all(|w| w[0].date != w[1].date),
        "entry collection holds duplicate dates"
    );

    StreakState {
        current_streak: current_streak(&sorted, today),
        longest_streak: longest_success_run(&sorted),
        last_slip_date: sorted
            .iter()
            .find(|e| e.status == Status::Slip)
            .map(|e| e.date),
    }
}

/// Count success days walking back from `today` one calendar day at a
/// time. The walk stops at the first date gap (including "nothing logged
/// today") or the first slip.
fn current_streak(sorted: &[&DailyEntry], today: NaiveDate) -> u32 {
    let mut cursor = today;
    let mut streak = 0;

    for entry in sorted {
        if entry.date != cursor || entry.status != Status::Success {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive success entries in the sorted sequence.
///
/// Consecutive means adjacent in list position: two successes with an
/// unlogged week between them still extend the same run. Only a logged
/// slip resets the counter. This intentionally differs from the strict
/// day-adjacency the current streak uses.
fn longest_success_run(sorted: &[&DailyEntry]) -> u32 {
    let mut longest = 0;
    let mut run = 0;

    for entry in sorted {
        match entry.status {
            Status::Success => {
                run += 1;
                longest = longest.max(run);
            }
            Status::Slip => run = 0,
        }
    }

    longest
}
