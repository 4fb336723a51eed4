// Chart session service
// Owns base events, the visible day grid, and the change log for one chart

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::change::EventChange;
use crate::models::change_log::ChangeLog;
use crate::models::event::Event;
use crate::models::grid::{ColumnSpan, DayGrid};
use crate::models::settings::Settings;

/// What the hosting page hands the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub data: Vec<Event>,
}

impl ChartInput {
    /// The built-in sample window with two overlapping events
    pub fn demo() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            start: date(2023, 12, 25),
            end: date(2024, 2, 5),
            data: vec![
                Event {
                    id: "1".to_string(),
                    title: "First event".to_string(),
                    start: date(2024, 1, 4),
                    end: date(2024, 1, 15),
                },
                Event {
                    id: "2".to_string(),
                    title: "Second event".to_string(),
                    start: date(2024, 1, 12),
                    end: date(2024, 1, 31),
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a chart input JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart input {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse chart input {:?}", path))
    }
}

/// Where and how one displayed event is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPlacement {
    pub event: Event,
    /// `None` when the event runs off the visible window
    pub span: Option<ColumnSpan>,
    pub label: String,
}

/// Chart state for one mounted chart
#[derive(Debug, Clone)]
pub struct ChartSession {
    events: Vec<Event>,
    grid: DayGrid,
    changes: ChangeLog,
}

impl ChartSession {
    /// Validate the input and start with an empty change log
    pub fn new(input: ChartInput, settings: &Settings) -> Result<Self> {
        let grid = DayGrid::with_label_weekday(input.start, input.end, settings.label_weekday)?;
        for event in &input.data {
            event.validate()?;
        }

        log::info!(
            "Chart window {} to {} ({} days, {} events)",
            input.start,
            input.end,
            grid.len(),
            input.data.len()
        );

        Ok(Self {
            events: input.data,
            grid,
            changes: ChangeLog::new(),
        })
    }

    pub fn grid(&self) -> &DayGrid {
        &self.grid
    }

    pub fn base_events(&self) -> &[Event] {
        &self.events
    }

    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    pub fn record_change(&mut self, change: EventChange) {
        self.changes.push(change);
    }

    pub fn remove_change(&mut self, change_id: &str) -> Option<EventChange> {
        self.changes.remove(change_id)
    }

    pub fn displayed_events(&self) -> Vec<Event> {
        self.changes.displayed_events(&self.events)
    }

    /// Displayed events with their grid spans and captions
    pub fn bar_placements(&self) -> Vec<BarPlacement> {
        self.displayed_events()
            .into_iter()
            .map(|event| {
                let span = self.grid.column_span(&event);
                if span.is_none() {
                    log::warn!("Event {} lies outside the visible window", event.id);
                }
                BarPlacement {
                    label: event.bar_label(),
                    span,
                    event,
                }
            })
            .collect()
    }

    /// Change list lines paired with the change id they revert
    pub fn change_descriptions(&self) -> Vec<(String, String)> {
        self.changes
            .iter()
            .map(|change| (change.id.clone(), change.describe(&self.events)))
            .collect()
    }
}
