// Change module
// Edit records targeting a base event, and the fold that applies them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::utils::date::{add_days, format_month_day};

/// A single pending edit to one event
///
/// Serializes as a flat object tagged by `type`, for example
/// `{"id":"c1","eventId":"1","type":"change-end-date","originalEnd":"2024-01-15","newEnd":"2024-01-18"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChange {
    /// Identifier of the change record itself
    pub id: String,
    /// The event this change targets
    pub event_id: String,
    #[serde(flatten)]
    pub kind: ChangeKind,
}

/// The edit carried by an [`EventChange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChangeKind {
    /// Overwrite the end date
    #[serde(rename_all = "camelCase")]
    ChangeEndDate {
        original_end: NaiveDate,
        new_end: NaiveDate,
    },
    /// Recorded but inert: applying it leaves the start untouched
    #[serde(rename_all = "camelCase")]
    ChangeStartDate {
        original_start: NaiveDate,
        new_start: NaiveDate,
    },
    /// Move both ends by a signed number of days
    ShiftByDays { days: i64 },
}

impl EventChange {
    pub fn new(id: impl Into<String>, event_id: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            kind,
        }
    }

    pub fn change_end_date(
        id: impl Into<String>,
        event_id: impl Into<String>,
        original_end: NaiveDate,
        new_end: NaiveDate,
    ) -> Self {
        Self::new(
            id,
            event_id,
            ChangeKind::ChangeEndDate {
                original_end,
                new_end,
            },
        )
    }

    pub fn change_start_date(
        id: impl Into<String>,
        event_id: impl Into<String>,
        original_start: NaiveDate,
        new_start: NaiveDate,
    ) -> Self {
        Self::new(
            id,
            event_id,
            ChangeKind::ChangeStartDate {
                original_start,
                new_start,
            },
        )
    }

    pub fn shift_by_days(id: impl Into<String>, event_id: impl Into<String>, days: i64) -> Self {
        Self::new(id, event_id, ChangeKind::ShiftByDays { days })
    }

    /// The `type` tag this record serializes with
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ChangeKind::ChangeEndDate { .. } => "change-end-date",
            ChangeKind::ChangeStartDate { .. } => "change-start-date",
            ChangeKind::ShiftByDays { .. } => "shift-by-days",
        }
    }

    /// Human-readable line for the change list
    ///
    /// The event title is looked up in `events`; an unknown event id is shown as-is.
    pub fn describe(&self, events: &[Event]) -> String {
        let title = events
            .iter()
            .find(|e| e.id == self.event_id)
            .map(|e| e.title.as_str())
            .unwrap_or(self.event_id.as_str());

        match self.kind {
            ChangeKind::ChangeEndDate {
                original_end,
                new_end,
            } => format!(
                "{}: Change end date from {} to {}",
                title,
                format_month_day(original_end),
                format_month_day(new_end)
            ),
            ChangeKind::ChangeStartDate {
                original_start,
                new_start,
            } => format!(
                "{}: Change start date from {} to {}",
                title,
                format_month_day(original_start),
                format_month_day(new_start)
            ),
            ChangeKind::ShiftByDays { days } => format!(
                "{}: Shift by {} day{}",
                title,
                days,
                if days.abs() == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Fold `changes` onto a copy of `base`, in order
///
/// Every change is applied regardless of its `event_id`; callers filter first
/// (see [`apply_changes_to_events`]).
pub fn apply_changes_to_event<'a, I>(base: &Event, changes: I) -> Event
where
    I: IntoIterator<Item = &'a EventChange>,
{
    let mut changed = base.clone();
    for change in changes {
        match change.kind {
            ChangeKind::ChangeEndDate { new_end, .. } => {
                changed.end = new_end;
            }
            ChangeKind::ChangeStartDate { .. } => {}
            ChangeKind::ShiftByDays { days } => {
                match (add_days(changed.start, days), add_days(changed.end, days)) {
                    (Some(start), Some(end)) => {
                        changed.start = start;
                        changed.end = end;
                    }
                    _ => log::warn!(
                        "Ignoring shift of {} days on event {}: date out of range",
                        days,
                        changed.id
                    ),
                }
            }
        }
    }
    changed
}

/// Project every base event through the changes that target it
///
/// Relative order of each event's changes is preserved. Neither input is mutated.
pub fn apply_changes_to_events(events: &[Event], change_log: &[EventChange]) -> Vec<Event> {
    events
        .iter()
        .map(|event| {
            apply_changes_to_event(
                event,
                change_log.iter().filter(|c| c.event_id == event.id),
            )
        })
        .collect()
}
