// Event module
// Immutable base facts plotted on the chart

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, Result};
use crate::utils::date::{difference_in_days, format_day};

/// A base event as supplied by the hosting page
///
/// Events are never mutated by the chart. Edits are expressed as
/// [`EventChange`](crate::models::change::EventChange) records and folded on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use rust_gantt::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let event = Event::new("1", "First event", start, end).unwrap();
    /// assert_eq!(event.length_in_days(), 11);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GanttError::InvalidEvent {
                id: self.id.clone(),
                reason: "event id cannot be empty".to_string(),
            });
        }

        if self.end < self.start {
            return Err(GanttError::InvalidEvent {
                id: self.id.clone(),
                reason: format!("end {} precedes start {}", self.end, self.start),
            });
        }

        Ok(())
    }

    /// Whole days between start and end
    pub fn length_in_days(&self) -> i64 {
        difference_in_days(self.end, self.start)
    }

    /// Bar caption, e.g. `First event (4–15)`
    pub fn bar_label(&self) -> String {
        format!(
            "{} ({}\u{2013}{})",
            self.title,
            format_day(self.start),
            format_day(self.end)
        )
    }
}
