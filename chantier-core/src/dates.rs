//! Parsing and formatting of project and task dates.
//!
//! Dates travel as plain `YYYY-MM-DD` strings on the wire and are held as
//! `NaiveDate` in memory, so every comparison is a calendar-date comparison
//! with no time-of-day or timezone involved.

use chrono::NaiveDate;

use crate::error::{ChantierError, ChantierResult};

/// Parse a `YYYY-MM-DD` date string.
///
/// Anything that does not parse is an `InvalidDate` error; callers validate
/// at ingestion, nothing downstream re-checks.
pub fn parse_date(s: &str) -> ChantierResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ChantierError::InvalidDate(s.to_string()))
}

/// Format a date the way the UI displays it (dd/mm/yyyy).
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
