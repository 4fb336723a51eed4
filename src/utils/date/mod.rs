// Date utility functions
// Calendar-day formatting and arithmetic shared by the grid and change list

use chrono::{Datelike, Duration, NaiveDate};

/// Normalize any date-like value to its calendar day, dropping time-of-day
pub fn calendar_day<D: Datelike>(date: &D) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(date.num_days_from_ce())
}

/// Check whether two date-like values fall on the same calendar day
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.num_days_from_ce() == b.num_days_from_ce()
}

/// `yyyy-MM-dd`
pub fn date_to_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `MMM d`, e.g. `Jan 4`
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Day of month without padding
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Signed day arithmetic; `None` when the result leaves chrono's range
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Whole days from `start` to `end` (negative when `end` is earlier)
pub fn difference_in_days(end: NaiveDate, start: NaiveDate) -> i64 {
    (end - start).num_days()
}
