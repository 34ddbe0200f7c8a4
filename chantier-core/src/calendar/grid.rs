//! The fixed 6-week month grid.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::calendar::period::TaskPeriod;

/// The grid always spans 6 full weeks, whatever the month looks like.
pub const DAYS_IN_GRID: usize = 42;

/// A month position with a 0-based month (0 = January), matching the month
/// convention of the calendar endpoint and the front end's `Date` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    /// `month0` must be in `0..=11`; callers normalize before constructing.
    pub fn new(year: i32, month0: u32) -> Self {
        debug_assert!(month0 < 12, "month0 out of range: {month0}");
        MonthCursor { year, month0 }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            MonthCursor { year: self.year + 1, month0: 0 }
        } else {
            MonthCursor { year: self.year, month0: self.month0 + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            MonthCursor { year: self.year - 1, month0: 11 }
        } else {
            MonthCursor { year: self.year, month0: self.month0 - 1 }
        }
    }

    /// First calendar day of the month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).expect("month0 in 0..=11")
    }

    /// Last calendar day of the month (day before the first of the next).
    pub fn last_day(self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }
}

/// One cell of the 6-week grid.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[serde(rename = "isCurrentMonth")]
    pub is_current_month: bool,
    #[serde(rename = "isToday")]
    pub is_today: bool,
    #[serde(rename = "taches")]
    pub periods: Vec<TaskPeriod>,
}

/// Build the 42-day grid for `month0`/`year`, starting on the Sunday
/// on/before the first of the month.
///
/// `month0` is 0-based and must be in `0..=11`. A month whose first day is a
/// Sunday keeps its full leading week of that month; the grid is always
/// exactly 6 rows, so short months show up to a near-full trailing week of
/// the next month. Pure function of its inputs.
pub fn build_month_grid(year: i32, month0: u32, today: NaiveDate) -> Vec<CalendarDay> {
    let first = MonthCursor::new(year, month0).first_day();
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    (0..DAYS_IN_GRID as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDay {
                date,
                // Month-only comparison: the three months reachable inside a
                // 42-day window are always distinct, year boundary included.
                is_current_month: date.month0() == month0,
                is_today: date == today,
                periods: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_42_consecutive_days_starting_sunday() {
        let far_away = day(2020, 1, 1);
        for month0 in 0..12 {
            let grid = build_month_grid(2024, month0, far_away);
            assert_eq!(grid.len(), DAYS_IN_GRID);
            assert_eq!(grid[0].date.weekday(), Weekday::Sun);
            for pair in grid.windows(2) {
                assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
            }
        }
    }

    #[test]
    fn test_february_2024_window() {
        let grid = build_month_grid(2024, 1, day(2024, 2, 10));
        assert_eq!(grid[0].date, day(2024, 1, 28));
        assert_eq!(grid[41].date, day(2024, 3, 9));
    }

    #[test]
    fn test_current_month_tagging() {
        let grid = build_month_grid(2024, 1, day(2024, 2, 10));
        assert!(!grid[0].is_current_month); // Jan 28
        assert!(grid[4].is_current_month); // Feb 1
        assert_eq!(grid.iter().filter(|d| d.is_current_month).count(), 29);
    }

    #[test]
    fn test_today_flag_set_exactly_once_inside_window() {
        let grid = build_month_grid(2024, 1, day(2024, 2, 16));
        let today: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, day(2024, 2, 16));
    }

    #[test]
    fn test_today_flag_absent_when_outside_window() {
        let grid = build_month_grid(2024, 1, day(2025, 7, 1));
        assert!(grid.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_month_starting_on_sunday_keeps_full_leading_week() {
        // September 2024 starts on a Sunday: no prior-month padding at all,
        // and the fixed 6 rows run well into October.
        let grid = build_month_grid(2024, 8, day(2024, 9, 1));
        assert_eq!(grid[0].date, day(2024, 9, 1));
        assert!(grid[0].is_current_month);
        assert_eq!(grid[41].date, day(2024, 10, 12));
    }

    #[test]
    fn test_december_window_crosses_year_boundary() {
        let grid = build_month_grid(2024, 11, day(2024, 12, 15));
        let last = grid.last().unwrap();
        assert_eq!(last.date.year(), 2025);
        assert!(!last.is_current_month);
    }

    #[test]
    fn test_month_cursor_navigation_wraps_years() {
        assert_eq!(MonthCursor::new(2024, 11).next(), MonthCursor::new(2025, 0));
        assert_eq!(MonthCursor::new(2025, 0).prev(), MonthCursor::new(2024, 11));
        assert_eq!(MonthCursor::new(2024, 5).next(), MonthCursor::new(2024, 6));
    }

    #[test]
    fn test_month_cursor_first_and_last_day() {
        let feb = MonthCursor::new(2024, 1);
        assert_eq!(feb.first_day(), day(2024, 2, 1));
        assert_eq!(feb.last_day(), day(2024, 2, 29));
    }
}
