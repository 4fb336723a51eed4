// Change log module
// Session-wide ordered list of pending edits

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::change::{apply_changes_to_event, apply_changes_to_events, EventChange};
use crate::models::event::Event;

/// Ordered, append-only log of pending changes for the whole chart
///
/// Records are only ever removed explicitly by id. Displayed events are
/// projected from the log on every read and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLog {
    changes: Vec<EventChange>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change; it applies after everything already logged
    pub fn push(&mut self, change: EventChange) {
        log::debug!(
            "Recorded {} change {} for event {}",
            change.type_name(),
            change.id,
            change.event_id
        );
        self.changes.push(change);
    }

    /// Remove the first record with `change_id`, keeping the others in order
    pub fn remove(&mut self, change_id: &str) -> Option<EventChange> {
        let index = self.changes.iter().position(|c| c.id == change_id)?;
        let removed = self.changes.remove(index);
        log::debug!("Reverted change {} for event {}", removed.id, removed.event_id);
        Some(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventChange> {
        self.changes.iter()
    }

    pub fn as_slice(&self) -> &[EventChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes targeting one event, in log order
    pub fn for_event<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a EventChange> + 'a {
        self.changes.iter().filter(move |c| c.event_id == event_id)
    }

    /// Current state of a single event
    pub fn displayed_event(&self, base: &Event) -> Event {
        apply_changes_to_event(base, self.for_event(&base.id))
    }

    /// Current state of every base event
    pub fn displayed_events(&self, base: &[Event]) -> Vec<Event> {
        apply_changes_to_events(base, &self.changes)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a ChangeLog {
    type Item = &'a EventChange;
    type IntoIter = std::slice::Iter<'a, EventChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl FromIterator<EventChange> for ChangeLog {
    fn from_iter<T: IntoIterator<Item = EventChange>>(iter: T) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
