//! Month-grid construction and per-day task period resolution.
//!
//! The grid builder and the period resolver are pure functions: the UI (or
//! the server's month-view endpoint) calls them on every navigation or
//! selection change and renders the result, nothing is cached or patched
//! incrementally.

mod grid;
mod period;

pub use grid::{CalendarDay, DAYS_IN_GRID, MonthCursor, build_month_grid};
pub use period::{BorderStyle, TaskPeriod, resolve_periods};

use chrono::NaiveDate;

use crate::project::Project;

/// Build the grid for `year`/`month0` and populate each day with the task
/// periods of `project`. Days carry no periods when no project is selected.
pub fn project_month(
    project: Option<&Project>,
    year: i32,
    month0: u32,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let mut days = build_month_grid(year, month0, today);
    for day in &mut days {
        day.periods = resolve_periods(project, day.date);
    }
    days
}
