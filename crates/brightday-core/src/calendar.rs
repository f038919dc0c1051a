//! Month-grid derivation for the calendar view.
//!
//! Produces a fixed six-week grid (42 cells) starting on the Sunday on or
//! before the first of the month, each cell annotated with the logged
//! status for that day if any. Rendering is left to the caller.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{DailyEntry, Status};
use crate::error::CoreError;

/// Number of cells in the month grid: six full Sunday-to-Saturday weeks.
pub const GRID_CELLS: usize = 42;

/// One cell in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Whether the cell falls inside the requested month (leading and
    /// trailing cells belong to the neighbor months).
    pub in_month: bool,
    pub is_today: bool,
    /// Logged status for this day, if an entry exists.
    pub status: Option<Status>,
}

/// A six-week calendar grid for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// The grid rows, one Sunday-to-Saturday week per slice.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Build the month grid for `year`/`month` from the entry collection.
pub fn month_grid(
    year: i32,
    month: u32,
    entries: &[DailyEntry],
    today: NaiveDate,
) -> Result<MonthGrid, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::InvalidDate {
        input: format!("{year:04}-{month:02}"),
    })?;
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    let days = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarDay {
            date,
            in_month: date.year() == year && date.month() == month,
            is_today: date == today,
            status: entries
                .iter()
                .find(|e| e.date == date)
                .map(|e| e.status),
        })
        .collect();

    Ok(MonthGrid { year, month, days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DailyEntry;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_always_six_weeks_starting_sunday() {
        // June 2024 starts on a Saturday.
        let grid = month_grid(2024, 6, &[], day(2024, 6, 15)).unwrap();
        assert_eq!(grid.days.len(), GRID_CELLS);
        assert_eq!(grid.days[0].date, day(2024, 5, 26));
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn month_starting_sunday_has_no_leading_padding() {
        // September 2024 starts on a Sunday.
        let grid = month_grid(2024, 9, &[], day(2024, 9, 1)).unwrap();
        assert_eq!(grid.days[0].date, day(2024, 9, 1));
        assert!(grid.days[0].in_month);
        assert!(grid.days[0].is_today);
    }

    #[test]
    fn neighbor_month_cells_are_marked_out_of_month() {
        let grid = month_grid(2024, 6, &[], day(2024, 6, 15)).unwrap();
        let out_of_month: Vec<_> = grid.days.iter().filter(|d| !d.in_month).collect();
        // 6 leading May days + 6 trailing July days
        assert_eq!(out_of_month.len(), GRID_CELLS - 30);
    }

    #[test]
    fn cells_carry_logged_status() {
        let entries = vec![
            DailyEntry::new(day(2024, 6, 10), Status::Success),
            DailyEntry::new(day(2024, 6, 11), Status::Slip),
        ];
        let grid = month_grid(2024, 6, &entries, day(2024, 6, 15)).unwrap();
        let cell = |d: NaiveDate| grid.days.iter().find(|c| c.date == d).copied().unwrap();
        assert_eq!(cell(day(2024, 6, 10)).status, Some(Status::Success));
        assert_eq!(cell(day(2024, 6, 11)).status, Some(Status::Slip));
        assert_eq!(cell(day(2024, 6, 12)).status, None);
    }

    #[test]
    fn year_boundary_padding_spans_both_years() {
        let grid = month_grid(2024, 1, &[], day(2024, 1, 15)).unwrap();
        // January 1st 2024 is a Monday; one leading December cell.
        assert_eq!(grid.days[0].date, day(2023, 12, 31));
        assert!(!grid.days[0].in_month);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(month_grid(2024, 13, &[], day(2024, 6, 15)).is_err());
    }
}
