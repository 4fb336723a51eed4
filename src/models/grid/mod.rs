// Date grid module
// Maps the visible calendar window onto day columns

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{GanttError, Result};
use crate::models::event::Event;
use crate::utils::date::{calendar_day, format_day, format_month_day};

/// Days of month that still carry the month name in a label
const MONTH_LABEL_MAX_DAY: u32 = 7;

/// Every calendar day from `start` to `end`, inclusive and ascending
///
/// Fails with [`GanttError::InvalidRange`] when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(GanttError::InvalidRange { start, end });
    }
    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

/// Zero-based column of `target` in `days`, compared by calendar day
///
/// Returns `None` when the target lies outside the sequence.
pub fn column_index<D: Datelike>(days: &[NaiveDate], target: &D) -> Option<usize> {
    let target = calendar_day(target)?;
    days.iter().position(|day| *day == target)
}

/// Grid placement of an event bar: 1-based, end-exclusive
///
/// The end column sits one past the event's last day so the bar covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    /// Number of day columns the bar covers
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Span for an event; `None` if either end is off the visible window
pub fn column_span(days: &[NaiveDate], event: &Event) -> Option<ColumnSpan> {
    let start = column_index(days, &event.start)?;
    let end = column_index(days, &event.end)?;
    Some(ColumnSpan {
        start: start + 1,
        end: end + 2,
    })
}

/// Header label for one day cell
///
/// Only days falling on `label_weekday` are labeled: "MMM d" during the first
/// week of a month, "d" otherwise.
pub fn day_label(day: NaiveDate, label_weekday: Weekday) -> Option<String> {
    if day.weekday() != label_weekday {
        return None;
    }
    if day.day() <= MONTH_LABEL_MAX_DAY {
        Some(format_month_day(day))
    } else {
        Some(format_day(day))
    }
}

/// The visible calendar window as an ordered run of day columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    days: Vec<NaiveDate>,
    label_weekday: Weekday,
}

impl DayGrid {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Self::with_label_weekday(start, end, Weekday::Mon)
    }

    pub fn with_label_weekday(start: NaiveDate, end: NaiveDate, label_weekday: Weekday) -> Result<Self> {
        Ok(Self {
            days: days_between(start, end)?,
            label_weekday,
        })
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn column_index<D: Datelike>(&self, target: &D) -> Option<usize> {
        column_index(&self.days, target)
    }

    pub fn column_span(&self, event: &Event) -> Option<ColumnSpan> {
        column_span(&self.days, event)
    }

    /// One optional label per column
    pub fn labels(&self) -> Vec<Option<String>> {
        self.days
            .iter()
            .map(|day| day_label(*day, self.label_weekday))
            .collect()
    }
}
